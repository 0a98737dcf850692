//! In-memory semantic model.

use crate::model::{SemanticModel, TypeInfo};
use crate::operation::{OperationData, OperationId, OperationKind};
use crate::symbol::{Symbol, SymbolId, SymbolKind};
use crate::types::{SpecialType, TypeData, TypeId, TypeKind};
use cfr_syntax::NodeIndex;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::trace;

/// Member groups are usually one or two overloads.
type MemberGroup = SmallVec<[SymbolId; 2]>;

/// Semantic model backed by flat tables and per-node maps.
#[derive(Clone, Debug)]
pub struct SemanticTable {
    symbols: Vec<Symbol>,
    types: Vec<TypeData>,
    operations: Vec<OperationData>,
    type_infos: FxHashMap<NodeIndex, TypeInfo>,
    bound_symbols: FxHashMap<NodeIndex, SymbolId>,
    member_groups: FxHashMap<NodeIndex, MemberGroup>,
    node_operations: FxHashMap<NodeIndex, OperationId>,
    object_type: TypeId,
}

impl SemanticModel for SemanticTable {
    fn type_info(&self, node: NodeIndex) -> TypeInfo {
        self.type_infos.get(&node).copied().unwrap_or_default()
    }

    fn operation(&self, node: NodeIndex) -> Option<OperationId> {
        self.node_operations.get(&node).copied()
    }

    fn symbol_info(&self, node: NodeIndex) -> Option<SymbolId> {
        self.bound_symbols.get(&node).copied()
    }

    fn member_group(&self, node: NodeIndex) -> &[SymbolId] {
        self.member_groups
            .get(&node)
            .map_or(&[][..], |group| group.as_slice())
    }

    fn object_type(&self) -> TypeId {
        self.object_type
    }

    fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.0 as usize)
    }

    fn type_data(&self, id: TypeId) -> Option<&TypeData> {
        self.types.get(id.0 as usize)
    }

    fn operation_data(&self, id: OperationId) -> Option<&OperationData> {
        self.operations.get(id.0 as usize)
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Populates a [`SemanticTable`].
///
/// A fresh builder already contains the global namespace, `System` and
/// `System.Object`.
#[derive(Debug)]
pub struct SemanticTableBuilder {
    table: SemanticTable,
    global_namespace: SymbolId,
    namespaces: FxHashMap<(SymbolId, String), SymbolId>,
}

impl SemanticTableBuilder {
    pub fn new() -> Self {
        let mut builder = SemanticTableBuilder {
            table: SemanticTable {
                symbols: Vec::new(),
                types: Vec::new(),
                operations: Vec::new(),
                type_infos: FxHashMap::default(),
                bound_symbols: FxHashMap::default(),
                member_groups: FxHashMap::default(),
                node_operations: FxHashMap::default(),
                object_type: TypeId(0),
            },
            global_namespace: SymbolId(0),
            namespaces: FxHashMap::default(),
        };
        builder.global_namespace =
            builder.add_symbol(Symbol::new("", SymbolKind::Namespace, None, None));
        let system = builder.namespace(&["System"]);
        let object = builder.add_type(
            TypeData::named("Object", TypeKind::Class, 0, Some(system))
                .with_special(SpecialType::Object),
        );
        builder.table.object_type = object;
        builder
    }

    pub fn global_namespace(&self) -> SymbolId {
        self.global_namespace
    }

    pub fn object_type(&self) -> TypeId {
        self.table.object_type
    }

    /// Find or create the namespace `path`, written outermost first
    /// (`["System", "Threading", "Tasks"]`).
    pub fn namespace(&mut self, path: &[&str]) -> SymbolId {
        let mut current = self.global_namespace;
        for segment in path {
            let key = (current, (*segment).to_string());
            current = match self.namespaces.get(&key) {
                Some(&existing) => existing,
                None => {
                    let created = self.add_symbol(Symbol::new(
                        *segment,
                        SymbolKind::Namespace,
                        None,
                        Some(current),
                    ));
                    self.namespaces.insert(key, created);
                    created
                }
            };
        }
        current
    }

    pub fn add_symbol(&mut self, symbol: Symbol) -> SymbolId {
        let id = SymbolId(self.table.symbols.len() as u32);
        trace!(id = id.0, name = %symbol.name, kind = ?symbol.kind, "add_symbol");
        self.table.symbols.push(symbol);
        id
    }

    pub fn add_type(&mut self, data: TypeData) -> TypeId {
        let id = TypeId(self.table.types.len() as u32);
        trace!(id = id.0, name = %data.name, kind = ?data.kind, "add_type");
        self.table.types.push(data);
        id
    }

    /// Construct a generic type from its definition and type arguments.
    ///
    /// The constructed entry shares the definition's name, kind, containing
    /// symbol and members. Returns `None` for an unknown definition.
    pub fn construct(&mut self, original: TypeId, type_arguments: Vec<TypeId>) -> Option<TypeId> {
        let definition = self.table.types.get(original.0 as usize)?;
        let constructed = TypeData {
            original: Some(original),
            type_arguments,
            constraints: Vec::new(),
            ..definition.clone()
        };
        Some(self.add_type(constructed))
    }

    /// Declare `member` on `owner` and return it.
    pub fn add_member(&mut self, owner: TypeId, member: Symbol) -> Option<SymbolId> {
        if self.table.types.get(owner.0 as usize).is_none() {
            return None;
        }
        let id = self.add_symbol(member);
        if let Some(data) = self.table.types.get_mut(owner.0 as usize) {
            data.members.push(id);
        }
        Some(id)
    }

    pub fn add_operation(
        &mut self,
        kind: OperationKind,
        ty: Option<TypeId>,
        syntax: NodeIndex,
    ) -> OperationId {
        let id = OperationId(self.table.operations.len() as u32);
        self.table
            .operations
            .push(OperationData { kind, ty, syntax });
        id
    }

    /// Add an operation and make it the one returned for `node`.
    pub fn add_operation_for(
        &mut self,
        node: NodeIndex,
        kind: OperationKind,
        ty: Option<TypeId>,
    ) -> OperationId {
        let id = self.add_operation(kind, ty, node);
        self.set_operation(node, id);
        id
    }

    pub fn set_operation(&mut self, node: NodeIndex, operation: OperationId) -> &mut Self {
        self.table.node_operations.insert(node, operation);
        self
    }

    pub fn set_type_info(&mut self, node: NodeIndex, info: TypeInfo) -> &mut Self {
        self.table.type_infos.insert(node, info);
        self
    }

    pub fn set_symbol_info(&mut self, node: NodeIndex, symbol: SymbolId) -> &mut Self {
        self.table.bound_symbols.insert(node, symbol);
        self
    }

    pub fn set_member_group(
        &mut self,
        node: NodeIndex,
        group: impl IntoIterator<Item = SymbolId>,
    ) -> &mut Self {
        self.table
            .member_groups
            .insert(node, group.into_iter().collect());
        self
    }

    pub fn build(self) -> SemanticTable {
        self.table
    }
}

impl Default for SemanticTableBuilder {
    fn default() -> Self {
        SemanticTableBuilder::new()
    }
}
