//! Shared UI building blocks used by the feature views.

pub(crate) mod atoms;
