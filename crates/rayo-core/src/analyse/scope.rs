// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Scope tracking for semantic analysis.
//!
//! Scopes live in an arena and refer to their enclosing scope by [`ScopeId`]
//! index, never by reference, so a scope cannot outlive its arena and no
//! reference cycles are possible. A scope maps declared names to their
//! inferred types and tracks a used-flag per name; declaration order is
//! preserved so unused-name diagnostics come out deterministically.

use std::collections::HashMap;

use ecow::EcoString;

use crate::source_analysis::Span;

use super::types::Type;

/// Index of a scope within a [`ScopeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

/// A declared name's bookkeeping entry.
#[derive(Debug, Clone)]
struct Symbol {
    ty: Type,
    used: bool,
    declared_at: Span,
}

/// One scope: name → type/usage table plus an index link to the enclosing
/// scope.
#[derive(Debug, Default)]
struct Scope {
    parent: Option<ScopeId>,
    symbols: HashMap<EcoString, Symbol>,
    /// Declaration order, for deterministic diagnostics.
    order: Vec<EcoString>,
}

/// Arena of scopes for one analysis pass.
///
/// Created per pass and discarded when the pass completes.
#[derive(Debug, Default)]
pub struct ScopeArena {
    scopes: Vec<Scope>,
}

impl ScopeArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a new scope with an optional enclosing scope.
    pub fn alloc(&mut self, parent: Option<ScopeId>) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            parent,
            ..Scope::default()
        });
        id
    }

    /// Declares `name` in `scope` with the given type, initially unused.
    /// Re-declaring a name keeps its original position in declaration order.
    pub fn declare(&mut self, scope: ScopeId, name: &EcoString, ty: Type, declared_at: Span) {
        let scope = &mut self.scopes[scope.0];
        if !scope.symbols.contains_key(name) {
            scope.order.push(name.clone());
        }
        scope.symbols.insert(
            name.clone(),
            Symbol {
                ty,
                used: false,
                declared_at,
            },
        );
    }

    /// Marks `name` used, searching from `scope` outward through enclosing
    /// scopes. Unknown names are ignored.
    pub fn mark_used(&mut self, scope: ScopeId, name: &str) {
        let mut current = Some(scope);
        while let Some(id) = current {
            if let Some(symbol) = self.scopes[id.0].symbols.get_mut(name) {
                symbol.used = true;
                return;
            }
            current = self.scopes[id.0].parent;
        }
    }

    /// Looks up a name's type, searching from `scope` outward.
    #[must_use]
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Type> {
        let mut current = Some(scope);
        while let Some(id) = current {
            if let Some(symbol) = self.scopes[id.0].symbols.get(name) {
                return Some(&symbol.ty);
            }
            current = self.scopes[id.0].parent;
        }
        None
    }

    /// Names declared in `scope` that were never used, in declaration order,
    /// with their declaration spans.
    #[must_use]
    pub fn unused(&self, scope: ScopeId) -> Vec<(EcoString, Span)> {
        let scope = &self.scopes[scope.0];
        scope
            .order
            .iter()
            .filter_map(|name| {
                let symbol = &scope.symbols[name];
                (!symbol.used).then(|| (name.clone(), symbol.declared_at))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyse::types::BasicType;

    fn name(s: &str) -> EcoString {
        EcoString::from(s)
    }

    #[test]
    fn declare_and_lookup() {
        let mut arena = ScopeArena::new();
        let root = arena.alloc(None);
        arena.declare(root, &name("x"), Type::Basic(BasicType::Int), Span::default());
        assert_eq!(
            arena.lookup(root, "x"),
            Some(&Type::Basic(BasicType::Int))
        );
        assert_eq!(arena.lookup(root, "y"), None);
    }

    #[test]
    fn lookup_walks_parent_chain() {
        let mut arena = ScopeArena::new();
        let root = arena.alloc(None);
        let inner = arena.alloc(Some(root));
        arena.declare(root, &name("x"), Type::Any, Span::default());
        assert!(arena.lookup(inner, "x").is_some());
    }

    #[test]
    fn unused_reports_in_declaration_order() {
        let mut arena = ScopeArena::new();
        let root = arena.alloc(None);
        arena.declare(root, &name("b"), Type::Any, Span::default());
        arena.declare(root, &name("a"), Type::Any, Span::default());
        arena.declare(root, &name("c"), Type::Any, Span::default());
        arena.mark_used(root, "a");
        let unused: Vec<_> = arena.unused(root).into_iter().map(|(n, _)| n).collect();
        assert_eq!(unused, vec![name("b"), name("c")]);
    }

    #[test]
    fn mark_used_in_enclosing_scope() {
        let mut arena = ScopeArena::new();
        let root = arena.alloc(None);
        let inner = arena.alloc(Some(root));
        arena.declare(root, &name("x"), Type::Any, Span::default());
        arena.mark_used(inner, "x");
        assert!(arena.unused(root).is_empty());
    }
}
