//! Flutter-facing bindings for wordpace core.

pub mod api;
