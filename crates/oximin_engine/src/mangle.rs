//! Scope-aware variable renaming with a persistent cache for top-level names.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use log::{debug, trace};
use oxc_ast::ast::WithStatement;
use oxc_ast_visit::Visit;
use oxc_semantic::Scoping;
use oxc_syntax::{scope::ScopeId, symbol::SymbolId};
use oximin_core::{MangleCache, ReservedNames};

use crate::names::{NameGenerator, is_reserved_word};
use crate::parse::Unit;

/// Finds `with` statements, which make every name in a file dynamic.
#[derive(Default)]
struct WithFinder {
    found: bool,
}

impl<'a> Visit<'a> for WithFinder {
    fn visit_with_statement(&mut self, _it: &WithStatement<'a>) {
        self.found = true;
    }
}

/// Renames bindings across a set of files that end up in one output.
///
/// Top-level bindings share a namespace (and the rename cache) across all
/// files; nested bindings are renamed per file.
pub(crate) struct VariableMangler<'r> {
    reserved: &'r ReservedNames,
    /// Every name that resolves to something outside the renamed bindings:
    /// unresolved references of all files and every kept top-level name.
    globals: HashSet<String>,
    unresolved: HashSet<String>,
    skipped: Vec<bool>,
    toplevel: bool,
    ie8: bool,
    cache: MangleCache,
}

impl<'r> VariableMangler<'r> {
    pub(crate) fn new(
        units: &[Unit<'_>],
        scopings: &[Scoping],
        reserved: &'r ReservedNames,
        cache: MangleCache,
        toplevel: bool,
        ie8: bool,
    ) -> Self {
        let mut unresolved = HashSet::new();
        let mut skipped = Vec::with_capacity(units.len());

        for (unit, scoping) in units.iter().zip(scopings) {
            let names: Vec<String> =
                scoping.root_unresolved_references().keys().map(|name| name.to_string()).collect();
            let mut finder = WithFinder::default();
            finder.visit_program(&unit.program);
            let skip = finder.found || names.iter().any(|name| name == "eval");
            if skip {
                debug!("{} uses eval or with, names left as written", unit.name);
            }
            skipped.push(skip);
            unresolved.extend(names);
        }

        let mut mangler = Self {
            reserved,
            globals: unresolved.clone(),
            unresolved,
            skipped,
            toplevel,
            ie8,
            cache,
        };

        for (index, scoping) in scopings.iter().enumerate() {
            let root = scoping.root_scope_id();
            for symbol_id in scoping.symbol_ids() {
                if scoping.symbol_scope_id(symbol_id) != root {
                    continue;
                }
                let name = scoping.symbol_name(symbol_id);
                if !mangler.renames_top_level(index, name) {
                    mangler.globals.insert(name.to_string());
                }
            }
        }

        mangler
    }

    fn renames_top_level(&self, index: usize, name: &str) -> bool {
        self.toplevel
            && !self.skipped[index]
            && !self.reserved.contains(name)
            && !self.unresolved.contains(name)
    }

    fn is_taken(&self, name: &str) -> bool {
        self.globals.contains(name) || self.reserved.contains(name)
    }

    /// Cached name for a top-level binding, or a fresh one from the counter.
    fn top_level_name(&mut self, name: &str) -> String {
        if let Some(cached) = self.cache.get(name)
            && !self.is_taken(cached)
            && !is_reserved_word(cached)
        {
            return cached.to_string();
        }

        let used: HashSet<String> = self.cache.mangled_names().map(str::to_string).collect();
        let mut generator = NameGenerator::starting_at(self.cache.next_counter());
        let fresh = generator.next_free(|candidate| self.is_taken(candidate) || used.contains(candidate));
        self.cache.advance_counter(generator.counter());
        trace!("Top-level {} -> {}", name, fresh);
        self.cache.insert(name, fresh.clone());
        fresh
    }

    /// Renames the bindings of file `index` in `scoping`.
    pub(crate) fn mangle(&mut self, index: usize, name: &str, scoping: &mut Scoping) {
        if self.skipped[index] {
            return;
        }

        let root = scoping.root_scope_id();
        let mut by_scope: IndexMap<ScopeId, Vec<SymbolId>> = IndexMap::new();
        for symbol_id in scoping.symbol_ids() {
            by_scope.entry(scoping.symbol_scope_id(symbol_id)).or_default().push(symbol_id);
        }

        let mut scopes: Vec<(usize, ScopeId)> = by_scope
            .keys()
            .map(|&scope_id| (scoping.scope_ancestors(scope_id).count(), scope_id))
            .collect();
        scopes.sort_by_key(|&(depth, _)| depth);

        // Final names of each scope's bindings, filled parents first.
        let mut final_names: HashMap<ScopeId, HashSet<String>> = HashMap::new();
        let mut file_names: HashSet<String> = HashSet::new();
        let mut renames: Vec<(SymbolId, String)> = Vec::new();

        for (_, scope_id) in scopes {
            let symbols = &by_scope[&scope_id];
            let mut names = HashSet::new();

            if scope_id == root {
                for &symbol_id in symbols {
                    let original = scoping.symbol_name(symbol_id).to_string();
                    let new_name = if self.renames_top_level(index, &original) {
                        let new_name = self.top_level_name(&original);
                        renames.push((symbol_id, new_name.clone()));
                        new_name
                    } else {
                        original
                    };
                    file_names.insert(new_name.clone());
                    names.insert(new_name);
                }
                final_names.insert(scope_id, names);
                continue;
            }

            let mut taken: HashSet<String> = HashSet::new();
            for ancestor in scoping.scope_ancestors(scope_id).skip(1) {
                if let Some(ancestor_names) = final_names.get(&ancestor) {
                    taken.extend(ancestor_names.iter().cloned());
                }
            }
            if self.ie8 {
                taken.extend(file_names.iter().cloned());
            }

            // Reserved bindings keep their name and block it for their siblings.
            let mut pending = Vec::new();
            for &symbol_id in symbols {
                let original = scoping.symbol_name(symbol_id);
                if self.reserved.contains(original) {
                    taken.insert(original.to_string());
                    names.insert(original.to_string());
                } else {
                    pending.push(symbol_id);
                }
            }

            let mut generator = NameGenerator::new();
            for symbol_id in pending {
                let new_name = generator.next_free(|candidate| {
                    taken.contains(candidate) || names.contains(candidate) || self.is_taken(candidate)
                });
                names.insert(new_name.clone());
                renames.push((symbol_id, new_name));
            }

            file_names.extend(names.iter().cloned());
            final_names.insert(scope_id, names);
        }

        debug!("Renaming {} bindings in {}", renames.len(), name);
        for (symbol_id, new_name) in renames {
            scoping.set_symbol_name(symbol_id, &new_name);
        }
    }

    /// The top-level rename cache, including assignments for names not seen
    /// in this run.
    pub(crate) fn into_cache(self) -> MangleCache {
        self.cache
    }
}
