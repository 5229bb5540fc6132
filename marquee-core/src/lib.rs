//! # Marquee Core
//!
//! Core library for the Marquee catalog backend: store ports over the
//! three catalog collections, the derived-view layer, and the one-time
//! publish notification workflow.
//!
//! ## Overview
//!
//! - [`store`]: per-collection persistence ports, the [`store::CatalogStore`]
//!   facade and the in-memory reference adapter
//! - [`relations`]: derived back-references from titles to performers and
//!   genres, computed at read time
//! - [`aggregate`]: denormalized listings and genre collection cards
//! - [`counters`]: atomic open-count increments and validated ratings
//! - [`notify`]: the announcement transport abstraction, its Telegram
//!   adapter and the dispatcher
//! - [`catalog`]: the [`catalog::CatalogService`] orchestrator consumed by
//!   the HTTP layer
//!
//! HTTP routing, authentication, file storage and the production store
//! driver live outside this crate; they talk to it exclusively through
//! [`catalog::CatalogService`] and the [`store`] ports.
#![allow(missing_docs)]

pub mod aggregate;
pub mod catalog;
pub mod counters;
pub mod error;
pub mod notify;
pub mod relations;
pub mod store;

pub use aggregate::AggregationEngine;
pub use catalog::CatalogService;
pub use counters::{CounterService, RATING_RANGE};
pub use error::{CatalogError, Result};
pub use notify::{
    LinkButton, NotificationDispatcher, NotificationTransport, NotifierConfig, TelegramConfig,
    TelegramTransport, TransportError,
};
pub use relations::RelationshipIndex;
pub use store::{CatalogStore, GenreStore, MemoryCatalogStore, PerformerStore, TitleStore};
