//! Command handlers.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `annotate` | `ModifyByIdentifierSet`, `ModifyByIdentifierMap`, `Annotate` |

pub mod annotate;
