//! Optics: composable, first-class accessors for immutable data.
//!
//! Each optic kind captures one access pattern:
//!
//! - [`Lens`]: one focus, always present, read and write
//! - [`Prism`]: one focus that may not match, with rebuild
//! - [`Iso`]: a lossless two-way conversion
//! - [`Optional`]: at most one focus, read and write
//! - [`Traversal`]: zero or more foci, read and write
//! - [`Getter`]: one focus, read only
//! - [`FoldOptic`]: zero or more foci, read only
//! - [`Setter`]: zero or more foci, write only
//!
//! Same-kind composition is the `compose` method on each trait. Cross-kind
//! composition lives in [`compose`] and follows a fixed table; pairs the
//! algebra disallows simply have no method.
//!
//! # Examples
//!
//! ```rust
//! use kindling::optics::{Lens, LensComposeExtension, Optional, Prism};
//! use kindling::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Contact { Email(String), Anonymous }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { contact: Contact }
//!
//! let email = lens!(User, contact).compose_prism(prism!(Contact, Email));
//!
//! let user = User { contact: Contact::Email("a@b.c".to_string()) };
//! assert_eq!(email.get_option(&user), Some("a@b.c".to_string()));
//!
//! let anon = User { contact: Contact::Anonymous };
//! assert_eq!(email.get_option(&anon), None);
//! ```

pub mod compose;
mod fold;
mod getter;
mod iso;
mod lens;
mod optional;
mod prism;
mod setter;
mod traversal;

pub use compose::{
    GetterAsFold, GetterComposeExtension, IsoComposeExtension, LensAsGetter, LensAsOptional,
    LensAsSetter, LensAsTraversal, LensComposeExtension, OptionalAsTraversal,
    OptionalComposeExtension, PrismAsOptional, PrismAsTraversal, PrismComposeExtension,
    TraversalAsFold, TraversalAsSetter, TraversalComposeExtension,
};
pub use fold::{ComposedFold, FoldOptic, FunctionFold};
pub use getter::{ComposedGetter, FunctionGetter, Getter};
pub use iso::{
    ComposedIso, FunctionIso, Iso, IsoAsLens, IsoAsPrism, ReversedIso, iso_identity, iso_swap,
};
pub use lens::{ComposedLens, FunctionLens, Lens};
pub use optional::{ComposedOptional, FunctionOptional, Optional};
pub use prism::{ComposedPrism, FunctionPrism, Prism};
pub use setter::{ComposedSetter, FunctionSetter, Setter};
pub use traversal::{ComposedTraversal, Traversal, VecTraversal};
