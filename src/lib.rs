//! A chainable, kind-preserving pipeline over in-memory collections.
//!
//! A [`Pipeline`] owns a collection and transforms it with
//! [`filter()`](Pipeline::filter), [`map()`](Pipeline::map),
//! [`limit()`](Pipeline::limit), and [`skip()`](Pipeline::skip) until one
//! terminal operation ([`all_match()`](Pipeline::all_match),
//! [`any_match()`](Pipeline::any_match), [`none_match()`](Pipeline::none_match),
//! [`count()`](Pipeline::count), or [`collect()`](Pipeline::collect)) consumes it.
//!
//! # Motivation
//!
//! [`Iterator`] adaptors forget what the items came from: filtering a set
//! hands back a `Filter<...>`, and whoever collects it has to remember to
//! rebuild a set. A pipeline keeps the *kind* of its collection instead.
//! Filtering a set yields a set, and limiting a tuple yields a tuple.
//!
//! ```
//! use better_stream::{prelude::*, ContainerKind};
//! use indexmap::IndexSet;
//!
//! let tags = IndexSet::from(["rust", "stream", "set", "collector"]);
//! let short = Pipeline::of(tags).filter(|tag| tag.len() <= 4)?;
//!
//! assert_eq!(short.kind(), ContainerKind::Set);
//! assert_eq!(short.collect(Collector::to_list()), ["rust", "set"]);
//! # Ok::<(), better_stream::Error>(())
//! ```
//!
//! How a kind is rebuilt is not hard-coded: a [`Registry`] maps each
//! [`ContainerKind`] to a [`KindStrategy`] that knows how to make an empty
//! container, add one item, and merge two containers. Callers register their
//! own kinds with [`CustomKind`].
//!
//! ```
//! use better_stream::{prelude::*, CustomKind, KindId, Registry};
//!
//! // Kept in lexicographic order.
//! const SORTED: KindId = KindId::new("sorted");
//!
//! let registry = Registry::standard().with(CustomKind::new(
//!     SORTED,
//!     |sorted: &mut Vec<String>, item| {
//!         let at = sorted.partition_point(|word| *word <= item);
//!         sorted.insert(at, item);
//!     },
//! ))?;
//!
//! let words = ["open", "edit", "save", "close"].map(String::from);
//! let sorted = registry.collector(SORTED.into())?.collect(words)?;
//! let pipeline = Pipeline::with_registry(sorted, registry).skip(1)?;
//!
//! assert_eq!(pipeline.collect(Collector::to_list()), ["edit", "open", "save"]);
//! # Ok::<(), better_stream::Error>(())
//! ```
//!
//! # Sinks
//!
//! Every rebuild and reduction is driven by the push-based [`Sink`](sink::Sink)
//! protocol: a sink answers each item with a [`ControlFlow`], and producers
//! stop feeding it as soon as it answers [`Break`](std::ops::ControlFlow::Break).
//! That is why [`limit()`](Pipeline::limit) never visits the items it drops
//! and [`any_match()`](Pipeline::any_match) returns at the first success.
//! See the [`sink`] module for the protocol and its adapters.
//!
//! # Errors
//!
//! Intermediate operations return [`Result`]. They fail when the current kind
//! has no strategy in the registry ([`Error::UnsupportedKind`]) or when a
//! count is negative ([`Error::InvalidArgument`]).
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and installs no subscriber. Every
//! rebuild logs one `TRACE` event; registry changes and missing kinds log at
//! `DEBUG`.
//!
//! [`ControlFlow`]: std::ops::ControlFlow

mod collector;
mod container;
mod error;
mod kind;
mod pipeline;
pub mod prelude;
mod registry;
pub mod sink;
#[cfg(test)]
mod test_utils;

pub use collector::*;
pub use container::*;
pub use error::*;
pub use kind::*;
pub use pipeline::*;
pub use registry::*;
