//! Flutter-facing bindings for `pocketlist_core`.

pub mod api;
