//! Property renaming across all input files.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};
use oxc_allocator::Allocator;
use oxc_ast::ast::{
    AssignmentTargetPropertyIdentifier, BindingProperty, ComputedMemberExpression, Expression,
    ObjectProperty, PropertyKey, StaticMemberExpression,
};
use oxc_ast_visit::{Visit, VisitMut, walk, walk_mut};
use oxc_span::Atom;
use oximin_core::{MangleCache, MinifyError, PropertyMangleOptions};
use regex::Regex;

use crate::builtins::is_builtin_property;
use crate::names::NameGenerator;
use crate::parse::Unit;

/// Collects property names and the ones that must not change.
#[derive(Default)]
struct PropertyCollector {
    seen: IndexSet<String>,
    unmangleable: HashSet<String>,
}

impl<'a> Visit<'a> for PropertyCollector {
    fn visit_static_member_expression(&mut self, it: &StaticMemberExpression<'a>) {
        self.seen.insert(it.property.name.to_string());
        walk::walk_static_member_expression(self, it);
    }

    fn visit_computed_member_expression(&mut self, it: &ComputedMemberExpression<'a>) {
        if let Expression::StringLiteral(literal) = &it.expression {
            self.unmangleable.insert(literal.value.to_string());
        }
        walk::walk_computed_member_expression(self, it);
    }

    fn visit_property_key(&mut self, it: &PropertyKey<'a>) {
        match it {
            PropertyKey::StaticIdentifier(ident) => {
                self.seen.insert(ident.name.to_string());
            }
            PropertyKey::StringLiteral(literal) => {
                self.unmangleable.insert(literal.value.to_string());
            }
            _ => {}
        }
        walk::walk_property_key(self, it);
    }

    // `({ name } = value)` names a property and a variable with one token.
    fn visit_assignment_target_property_identifier(
        &mut self,
        it: &AssignmentTargetPropertyIdentifier<'a>,
    ) {
        self.unmangleable.insert(it.binding.name.to_string());
        walk::walk_assignment_target_property_identifier(self, it);
    }
}

/// Applies a computed rename table to the AST.
struct PropertyRenamer<'r, 'a> {
    allocator: &'a Allocator,
    renames: &'r IndexMap<String, String>,
}

impl<'a> PropertyRenamer<'_, 'a> {
    fn renamed(&self, name: &str) -> Option<Atom<'a>> {
        self.renames.get(name).map(|new_name| Atom::from(self.allocator.alloc_str(new_name)))
    }

    fn is_renamed_key(&self, key: &PropertyKey<'a>) -> bool {
        matches!(key, PropertyKey::StaticIdentifier(ident) if self.renames.contains_key(ident.name.as_str()))
    }
}

impl<'a> VisitMut<'a> for PropertyRenamer<'_, 'a> {
    fn visit_static_member_expression(&mut self, it: &mut StaticMemberExpression<'a>) {
        if let Some(name) = self.renamed(&it.property.name) {
            it.property.name = name;
        }
        walk_mut::walk_static_member_expression(self, it);
    }

    fn visit_property_key(&mut self, it: &mut PropertyKey<'a>) {
        if let PropertyKey::StaticIdentifier(ident) = it
            && let Some(name) = self.renamed(&ident.name)
        {
            ident.name = name;
        }
        walk_mut::walk_property_key(self, it);
    }

    fn visit_object_property(&mut self, it: &mut ObjectProperty<'a>) {
        if it.shorthand && self.is_renamed_key(&it.key) {
            it.shorthand = false;
        }
        walk_mut::walk_object_property(self, it);
    }

    fn visit_binding_property(&mut self, it: &mut BindingProperty<'a>) {
        if it.shorthand && self.is_renamed_key(&it.key) {
            it.shorthand = false;
        }
        walk_mut::walk_binding_property(self, it);
    }
}

/// Parses a `regex` option, accepting both `pattern` and `/pattern/flags`.
fn compile_regex(source: &str) -> Result<Regex, MinifyError> {
    let pattern = match source.strip_prefix('/').and_then(|rest| rest.rfind('/').map(|end| (rest, end))) {
        Some((rest, end)) => &rest[..end],
        None => source,
    };
    Regex::new(pattern).map_err(|e| MinifyError::InvalidOption {
        option: "mangle.properties.regex".to_string(),
        message: e.to_string(),
    })
}

/// Renames properties in every unit and returns the updated cache.
pub(crate) fn mangle_properties(
    units: &mut [Unit<'_>],
    options: &PropertyMangleOptions,
    mut cache: MangleCache,
) -> Result<MangleCache, MinifyError> {
    let regex = options.regex.as_deref().map(compile_regex).transpose()?;

    let mut collector = PropertyCollector::default();
    for unit in units.iter() {
        collector.visit_program(&unit.program);
    }

    let (candidates, kept): (Vec<&String>, Vec<&String>) =
        collector.seen.iter().partition(|name| {
            !options.reserved.contains(name)
                && !is_builtin_property(name)
                && !collector.unmangleable.contains(name.as_str())
                && regex.as_ref().is_none_or(|regex| regex.is_match(name))
        });
    debug!("{} properties to rename, {} kept", candidates.len(), kept.len());

    let mut blocked: HashSet<&str> = kept.iter().map(|name| name.as_str()).collect();
    blocked.extend(collector.unmangleable.iter().map(String::as_str));
    let is_blocked = |name: &str| {
        blocked.contains(name) || options.reserved.contains(name) || is_builtin_property(name)
    };

    let mut renames: IndexMap<String, String> = IndexMap::new();
    for name in candidates {
        let new_name = match cache.get(name) {
            Some(cached) if !is_blocked(cached) => cached.to_string(),
            _ => {
                let used: HashSet<&str> = cache.mangled_names().collect();
                let mut generator = NameGenerator::starting_at(cache.next_counter());
                let fresh =
                    generator.next_free(|candidate| is_blocked(candidate) || used.contains(candidate));
                cache.advance_counter(generator.counter());
                fresh
            }
        };
        trace!("Property {} -> {}", name, new_name);
        cache.insert(name, new_name.clone());
        renames.insert(name.clone(), new_name);
    }

    if !renames.is_empty() {
        for unit in units.iter_mut() {
            let mut renamer = PropertyRenamer { allocator: unit.allocator, renames: &renames };
            renamer.visit_program(&mut unit.program);
        }
    }

    Ok(cache)
}
