//! Error types for the Labyrinth core library.
//!
//! Every variant carries a stable machine-readable code so callers can log
//! and match failures without depending on display strings.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// `make_set` was called with an element that is already tracked.
    #[error("element is already tracked with id {id}")]
    DuplicateElement {
        /// Id previously assigned to the element.
        id: usize,
    },
    /// The element was never inserted with `make_set`.
    #[error("element is not tracked by the disjoint set")]
    UnknownElement,
    /// `union` was called on two elements that already share a set.
    #[error("elements already belong to the set represented by {representative}")]
    SameSet {
        /// Representative id shared by both elements.
        representative: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The element is already tracked.
        DuplicateElement => DuplicateElement { .. } => "DISJOINT_SET_DUPLICATE_ELEMENT",
        /// The element was never inserted.
        UnknownElement => UnknownElement => "DISJOINT_SET_UNKNOWN_ELEMENT",
        /// Both elements already share a set.
        SameSet => SameSet { .. } => "DISJOINT_SET_SAME_SET",
    }
}

/// Error type produced when constructing or querying a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// An edge carried a negative weight.
    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight {
        /// Position of the offending edge in the edge list.
        edge: usize,
        /// The rejected weight.
        weight: f64,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge {edge} has non-finite weight")]
    NonFiniteWeight {
        /// Position of the offending edge in the edge list.
        edge: usize,
    },
    /// Summing the edge weights up to this edge overflowed `f64`.
    #[error("total edge weight overflows at edge {edge}")]
    WeightOverflow {
        /// Position of the edge whose weight pushed the total past `f64::MAX`.
        edge: usize,
    },
    /// An edge referenced a vertex absent from the vertex list.
    #[error("edge {edge} references a vertex that is not in the graph")]
    MissingEndpoint {
        /// Position of the offending edge in the edge list.
        edge: usize,
    },
    /// A query named a vertex that is not in the graph.
    #[error("vertex is not in the graph")]
    UnknownVertex,
    /// The shortest-path frontier was exhausted before reaching the target.
    #[error("no path exists between the requested vertices")]
    NoPathExists,
    /// The graph cannot be spanned by a single tree.
    #[error("graph with {vertices} vertices splits into {components} components")]
    DisconnectedGraph {
        /// Number of distinct vertices in the graph.
        vertices: usize,
        /// Number of components left once every edge has been considered.
        components: usize,
    },
    /// The union-find backing an algorithm rejected an operation.
    #[error(transparent)]
    DisjointSet(#[from] DisjointSetError),
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge carried a negative weight.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// The summed edge weights are not representable.
        WeightOverflow => WeightOverflow { .. } => "GRAPH_WEIGHT_OVERFLOW",
        /// An edge referenced a vertex absent from the vertex list.
        MissingEndpoint => MissingEndpoint { .. } => "GRAPH_MISSING_ENDPOINT",
        /// A query named a vertex that is not in the graph.
        UnknownVertex => UnknownVertex => "GRAPH_UNKNOWN_VERTEX",
        /// No path exists between the requested vertices.
        NoPathExists => NoPathExists => "GRAPH_NO_PATH_EXISTS",
        /// The graph cannot be spanned by a single tree.
        DisconnectedGraph => DisconnectedGraph { .. } => "GRAPH_DISCONNECTED",
        /// The union-find backing an algorithm rejected an operation.
        DisjointSetFailure => DisjointSet { .. } => "GRAPH_DISJOINT_SET_FAILURE",
    }
}

impl GraphError {
    /// Returns `true` for errors raised while validating a graph's vertices
    /// and edges at construction time.
    #[must_use]
    pub const fn is_construction(&self) -> bool {
        matches!(
            self,
            Self::NegativeWeight { .. }
                | Self::NonFiniteWeight { .. }
                | Self::WeightOverflow { .. }
                | Self::MissingEndpoint { .. }
        )
    }

    /// Retrieve the inner [`DisjointSetErrorCode`] when the error originated
    /// in a [`crate::DisjointSet`].
    #[must_use]
    pub const fn disjoint_set_code(&self) -> Option<DisjointSetErrorCode> {
        match self {
            Self::DisjointSet(error) => Some(error.code()),
            _ => None,
        }
    }
}
