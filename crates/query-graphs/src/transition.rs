use crate::types::CompositeType;
use crate::types::FieldDefinition;

/// What traversing a query graph edge means in terms of the underlying
/// schema.
///
/// Every edge of a query graph carries exactly one [`Transition`]. Code that
/// walks the graph dispatches on it. The set of variants is closed, so a
/// `match` that handles all four variants covers every kind of edge:
///
/// ```
/// use query_graphs::Transition;
///
/// fn describe(transition: &Transition<'_>) -> &'static str {
///     match transition {
///         Transition::FieldCollection { .. } => "select a field",
///         Transition::DownCast { .. } => "narrow with an inline fragment",
///         Transition::KeyResolution => "jump to another service by key",
///         Transition::FreeTransition => "start at any service",
///     }
/// }
///
/// assert_eq!(describe(&Transition::key_resolution()), "jump to another service by key");
/// ```
///
/// Leaving a variant out is a compile error:
///
/// ```compile_fail
/// use query_graphs::Transition;
///
/// fn collects(transition: &Transition<'_>) -> bool {
///     match transition {
///         Transition::FieldCollection { .. } => true,
///         Transition::DownCast { .. } => true,
///         Transition::KeyResolution => false,
///     }
/// }
/// ```
///
/// Transitions borrow the schema elements they describe and never validate
/// them: the code building the query graph is responsible for only creating
/// transitions that match the edges they label.
#[derive(Clone, Copy, Debug)]
pub enum Transition<'schema> {
    /// The edge goes from a field's parent type to the field's base type.
    /// Traversing it selects the field.
    FieldCollection {
        definition: &'schema FieldDefinition,
    },

    /// The edge goes from an abstract type (interface or union) to one of its
    /// possible runtime types. Traversing it adds an inline fragment
    /// (`... on CastedType`).
    DownCast {
        source_type: &'schema CompositeType,
        casted_type: &'schema CompositeType,
    },

    /// Only found in federated query graphs: the edge goes from an entity type
    /// in one subgraph to the same entity type in another subgraph.
    ///
    /// Such an edge may only be taken once the key fields it requires are
    /// available. Those conditions belong to the edge, not to the transition.
    KeyResolution,

    /// Only found on edges out of the root vertices of federated query graphs.
    /// It corresponds to no schema element: the gateway is always free to
    /// start querying any subgraph.
    ///
    /// [`FREE_TRANSITION`] is the shared instance edges should point at.
    /// The variant can still be written out directly, and every such value
    /// compares (and hashes) equal to [`FREE_TRANSITION`].
    FreeTransition,
}

/// The one shared [`Transition::FreeTransition`].
pub static FREE_TRANSITION: Transition<'static> = Transition::FreeTransition;

/// Returns [`FREE_TRANSITION`]. Every call returns the same reference.
pub fn free_transition() -> &'static Transition<'static> {
    &FREE_TRANSITION
}

impl<'schema> Transition<'schema> {
    /// A [`Transition::FieldCollection`] selecting `definition`.
    pub fn field_collection(definition: &'schema FieldDefinition) -> Self {
        Self::FieldCollection { definition }
    }

    /// A [`Transition::DownCast`] narrowing `source_type` to `casted_type`.
    ///
    /// `casted_type` is expected to be a possible runtime type of
    /// `source_type` (see
    /// [`Schema::is_possible_runtime_type()`](crate::Schema::is_possible_runtime_type));
    /// that is not checked here.
    pub fn down_cast(
        source_type: &'schema CompositeType,
        casted_type: &'schema CompositeType,
    ) -> Self {
        Self::DownCast {
            source_type,
            casted_type,
        }
    }

    /// A [`Transition::KeyResolution`]. All key resolutions are equal; the
    /// key conditions live on the edge.
    pub fn key_resolution() -> Self {
        Self::KeyResolution
    }

    /// Whether traversing an edge with this transition adds an element (a
    /// field or an inline fragment) to the operation sent to the subgraph.
    pub fn collect_operation_elements(&self) -> bool {
        self.kind().collect_operation_elements()
    }

    /// The `(source_type, casted_type)` pair of a [`Transition::DownCast`].
    pub fn down_cast_types(&self) -> Option<(&'schema CompositeType, &'schema CompositeType)> {
        if let Self::DownCast { source_type, casted_type } = self {
            Some((*source_type, *casted_type))
        } else {
            None
        }
    }

    /// The field selected by a [`Transition::FieldCollection`].
    pub fn field_definition(&self) -> Option<&'schema FieldDefinition> {
        if let Self::FieldCollection { definition } = self {
            Some(*definition)
        } else {
            None
        }
    }

    /// Whether this is a [`Transition::FreeTransition`], whether or not it is
    /// [`FREE_TRANSITION`] itself.
    pub fn is_free(&self) -> bool {
        matches!(self, Self::FreeTransition)
    }

    /// Whether this is a [`Transition::KeyResolution`].
    pub fn is_key_resolution(&self) -> bool {
        matches!(self, Self::KeyResolution)
    }

    /// Which of the four kinds of transition this is. Determined by the
    /// variant alone, so it never changes for the lifetime of the value.
    pub fn kind(&self) -> TransitionKind {
        self.into()
    }
}

/// Two transitions are equal when they have the same kind and, for
/// [`Transition::FieldCollection`], the same field definition, or for
/// [`Transition::DownCast`], the same casted type.
///
/// "Same" means the same schema element in memory, not a structurally equal
/// one: two identical field definitions from two different schemas are
/// different fields.
impl PartialEq for Transition<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::FieldCollection { definition: self_def },
                Self::FieldCollection { definition: other_def },
            ) => std::ptr::eq(*self_def, *other_def),

            (
                Self::DownCast { casted_type: self_casted, .. },
                Self::DownCast { casted_type: other_casted, .. },
            ) => std::ptr::eq(*self_casted, *other_casted),

            (Self::KeyResolution, Self::KeyResolution)
            | (Self::FreeTransition, Self::FreeTransition)
                => true,

            _ => false,
        }
    }
}
impl Eq for Transition<'_> {}
impl std::hash::Hash for Transition<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Self::FieldCollection { definition } =>
                std::ptr::hash(*definition, state),
            Self::DownCast { casted_type, .. } =>
                std::ptr::hash(*casted_type, state),
            Self::KeyResolution | Self::FreeTransition => (),
        }
    }
}

/// Renders the transition for debugging and tracing output of graph edges.
/// The rendering is not a substitute for equality.
impl std::fmt::Display for Transition<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldCollection { definition } => f.write_str(definition.name()),
            Self::DownCast { casted_type, .. } => write!(f, "... on {}", casted_type.name()),
            Self::KeyResolution => f.write_str("key()"),
            Self::FreeTransition => f.write_str("∅"),
        }
    }
}

/// Similar to [`Transition`] except without the schema elements it carries.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TransitionKind {
    DownCast,
    FieldCollection,
    FreeTransition,
    KeyResolution,
}
impl TransitionKind {
    /// True for the kinds whose edges correspond to an element of the
    /// operation sent to a subgraph (a field selection or an inline
    /// fragment), false for the purely structural ones.
    pub fn collect_operation_elements(&self) -> bool {
        match self {
            Self::DownCast | Self::FieldCollection => true,
            Self::FreeTransition | Self::KeyResolution => false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::DownCast => "DownCast",
            Self::FieldCollection => "FieldCollection",
            Self::FreeTransition => "FreeTransition",
            Self::KeyResolution => "KeyResolution",
        }
    }
}
impl std::convert::From<&Transition<'_>> for TransitionKind {
    fn from(value: &Transition<'_>) -> Self {
        match value {
            Transition::DownCast { .. } => Self::DownCast,
            Transition::FieldCollection { .. } => Self::FieldCollection,
            Transition::FreeTransition => Self::FreeTransition,
            Transition::KeyResolution => Self::KeyResolution,
        }
    }
}
impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
