//! Centralized limits for walks over frontend-owned data.
//!
//! Every walk in the query layer follows links that the frontend built
//! (wrapped expressions, wrapped operations, containing symbols, nested type
//! syntax). Well-formed input is a tree, so each walk terminates on its own;
//! these bounds only matter when a frontend hands us a cycle or absurdly deep
//! nesting. When a bound is hit the walk logs at `debug` and stops.

/// Maximum number of wrapper expressions peeled by a single strip.
///
/// ```csharp
/// var x = ((((((((await (((GetAsync()))))))))));
/// ```
pub const MAX_EXPRESSION_UNWRAP_DEPTH: u32 = 10_000;

/// Maximum number of indirection operations followed while looking for a
/// reference target.
///
/// ```csharp
/// // Conversion(Unary(AddressOf(LocalReference))) and deeper
/// long v = (long)-(*&local);
/// ```
pub const MAX_OPERATION_UNWRAP_DEPTH: u32 = 10_000;

/// Maximum length of a containing-symbol chain (namespaces and enclosing
/// types) examined when matching a fully qualified name.
pub const MAX_CONTAINING_CHAIN_DEPTH: u32 = 256;

/// Maximum number of type-syntax nodes rendered when reading a return
/// annotation as text.
///
/// ```csharp
/// async A.B.C.D /* ...thousands more... */ .Task M() { }
/// ```
pub const MAX_TYPE_TEXT_NODES: u32 = 10_000;
