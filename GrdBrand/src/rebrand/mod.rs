//! Branding and re-keying of a GRD resource group
//!
//! A run has three phases:
//!
//! 1. [`walker`] brands every message of the GRD and its GRDP parts, recording
//!    each message's translation ID before and after branding.
//! 2. [`relocator`] moves the vendor XTB translations to the branded IDs.
//! 3. [`emitter`] writes the branded documents and bundles.
//!
//! [`brand_resource_group`] runs all of them for a [`ResourceGroup`].

pub mod emitter;
pub mod group;
pub mod relocator;
pub mod remap;
pub mod types;
pub mod walker;

pub use emitter::{emit_bundle, emit_document};
pub use group::{BrandSummary, OutputLayout, ResourceGroup, brand_resource_group};
pub use relocator::{LocaleKey, RelocatedLocale, Relocation, relocate, relocate_bundle};
pub use remap::{IdentifierRemap, RemapEntry};
pub use types::{BrandPhase, BrandProgress, BrandProgressCallback};
pub use walker::{
    DocumentExtras, ExtraBundle, FileInclusions, LocaleFile, WalkContext, WalkedDocument,
    walk_document,
};
