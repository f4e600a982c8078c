//! `npc-world` — the in-memory world backing the behavior core.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`entity`] | `Entity` and `NavPoint` records                               |
//! | [`query`]  | `WorldQuery`, `EntitySpawner`, `Presentation`, `WorldApi`     |
//! | [`world`]  | `World` — slab-backed registry implementing all three traits  |
//! | [`error`]  | `WorldError`, `WorldResult<T>`                                |
//!
//! # Design notes
//!
//! The behavior core only ever talks to the traits in [`query`]; `World` is
//! the concrete in-process implementation.  Tests substitute their own stubs
//! where convenient.
//!
//! Storage is slab-style: the ID *is* the index, IDs are handed out
//! sequentially and never reused, and every by-tag query returns handles in
//! ascending ID order.  That makes "first match wins" queries deterministic
//! across runs without any sorting.

pub mod entity;
pub mod error;
pub mod query;
pub mod world;


pub use entity::{Entity, NavPoint};
pub use error::{WorldError, WorldResult};
pub use query::{EntitySpawner, Presentation, WorldApi, WorldQuery};
pub use world::World;
