//! The class hierarchy table.
//!
//! Built once per run from the parsed class list: injects the five
//! built-in classes, validates global well-formedness (no redefinition,
//! legal parents, a `Main` class, acyclic inheritance resolving to
//! declared classes), and then serves every hierarchy query for the rest
//! of the phase. Any structural error aborts construction; no partial
//! hierarchy is ever used.

use std::collections::HashMap;

use cool_ast::{ClassDecl, Feature, Program};
use cool_core::{Interner, Names, Span, Symbol};

use crate::diagnostics::{ErrorLocation, SemanticError, SemanticErrorKind};

/// Signature of a formal parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormalInfo {
    pub name: Symbol,
    pub declared_type: Symbol,
}

/// Signature of a method, as seen by dispatch and override checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    pub name: Symbol,
    pub formals: Vec<FormalInfo>,
    pub return_type: Symbol,
}

/// Signature of an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeInfo {
    pub name: Symbol,
    pub declared_type: Symbol,
}

/// Everything the checker needs to know about one class.
///
/// Holds extracted signatures rather than borrowing the AST, so the tree
/// stays free for in-place type decoration while the table is queried.
#[derive(Debug, Clone)]
pub struct ClassInfo {
    pub name: Symbol,
    pub parent: Symbol,
    pub methods: Vec<MethodInfo>,
    pub attributes: Vec<AttributeInfo>,
    pub file: Symbol,
    /// Built-in classes have no source location.
    pub span: Option<Span>,
}

impl ClassInfo {
    fn from_decl(class: &ClassDecl) -> Self {
        let mut methods = Vec::new();
        let mut attributes = Vec::new();
        for feature in &class.features {
            match feature {
                Feature::Method(method) => methods.push(MethodInfo {
                    name: method.name,
                    formals: method
                        .formals
                        .iter()
                        .map(|formal| FormalInfo {
                            name: formal.name,
                            declared_type: formal.declared_type,
                        })
                        .collect(),
                    return_type: method.return_type,
                }),
                Feature::Attribute(attribute) => attributes.push(AttributeInfo {
                    name: attribute.name,
                    declared_type: attribute.declared_type,
                }),
            }
        }
        Self {
            name: class.name,
            parent: class.parent,
            methods,
            attributes,
            file: class.file,
            span: Some(class.span),
        }
    }
}

/// The full set of declared classes, keyed by name.
#[derive(Debug)]
pub struct ClassTable {
    classes: HashMap<Symbol, ClassInfo>,
    object: Symbol,
    no_class: Symbol,
}

impl ClassTable {
    /// Builds and validates the hierarchy from the parsed class list.
    ///
    /// Checks run in declaration order; the first structural error aborts
    /// construction entirely.
    pub fn build(
        program: &Program,
        names: &Names,
        interner: &Interner,
    ) -> Result<Self, SemanticError> {
        let mut table = Self {
            classes: HashMap::new(),
            object: names.object,
            no_class: names.no_class,
        };
        table.install_basic_classes(names);

        let mut found_main = false;
        for class in &program.classes {
            if class.parent == class.name {
                return Err(error_at(
                    class,
                    interner,
                    SemanticErrorKind::InheritanceCycle {
                        class: interner.resolve(class.name).to_string(),
                    },
                ));
            }
            if class.name == names.self_type {
                return Err(error_at(
                    class,
                    interner,
                    SemanticErrorKind::SelfTypeRedefinition,
                ));
            }
            if names.is_illegal_parent(class.parent) {
                return Err(error_at(
                    class,
                    interner,
                    SemanticErrorKind::IllegalParent {
                        class: interner.resolve(class.name).to_string(),
                        parent: interner.resolve(class.parent).to_string(),
                    },
                ));
            }
            if table.classes.contains_key(&class.name) {
                return Err(error_at(
                    class,
                    interner,
                    SemanticErrorKind::DuplicateClass {
                        class: interner.resolve(class.name).to_string(),
                    },
                ));
            }
            table.classes.insert(class.name, ClassInfo::from_decl(class));
            if class.name == names.main_class {
                found_main = true;
            }
        }

        if !found_main {
            return Err(SemanticError::new(None, SemanticErrorKind::MissingMain));
        }

        table.check_cycles(program, interner)?;
        Ok(table)
    }

    /// Fast/slow pointer walk over every parent chain, bounded by reaching
    /// `Object`. Undefined parents surface here as well, since the walk is
    /// the first place every chain is fully resolved.
    fn check_cycles(&self, program: &Program, interner: &Interner) -> Result<(), SemanticError> {
        for class in &program.classes {
            let mut slow = class.name;
            let mut fast = class.name;

            loop {
                if slow == self.object || fast == self.object {
                    break;
                }
                slow = self.parent_of(slow, class, interner)?;
                if slow == self.object {
                    break;
                }
                fast = self.parent_of(fast, class, interner)?;
                if fast == self.object {
                    break;
                }
                fast = self.parent_of(fast, class, interner)?;
                if fast == self.object {
                    break;
                }
                if slow == fast {
                    return Err(error_at(
                        class,
                        interner,
                        SemanticErrorKind::InheritanceCycle {
                            class: interner.resolve(class.name).to_string(),
                        },
                    ));
                }
            }
        }
        Ok(())
    }

    fn parent_of(
        &self,
        current: Symbol,
        origin: &ClassDecl,
        interner: &Interner,
    ) -> Result<Symbol, SemanticError> {
        let parent = self
            .classes
            .get(&current)
            .map(|info| info.parent)
            .unwrap_or(self.no_class);
        if self.classes.contains_key(&parent) {
            Ok(parent)
        } else {
            Err(error_at(
                origin,
                interner,
                SemanticErrorKind::UndefinedParent {
                    class: interner.resolve(current).to_string(),
                    parent: interner.resolve(parent).to_string(),
                },
            ))
        }
    }

    /// Synthesizes the five built-in classes with their fixed signatures.
    /// Their bodies are opaque; only the signatures participate in checking.
    fn install_basic_classes(&mut self, names: &Names) {
        let method = |name, formals: &[(Symbol, Symbol)], return_type| MethodInfo {
            name,
            formals: formals
                .iter()
                .map(|&(name, declared_type)| FormalInfo {
                    name,
                    declared_type,
                })
                .collect(),
            return_type,
        };
        let attribute = |name, declared_type| AttributeInfo {
            name,
            declared_type,
        };

        let object = ClassInfo {
            name: names.object,
            parent: names.no_class,
            methods: vec![
                method(names.abort_method, &[], names.object),
                method(names.type_name, &[], names.string),
                method(names.copy_method, &[], names.self_type),
            ],
            attributes: vec![],
            file: names.basic_class_file,
            span: None,
        };

        let io = ClassInfo {
            name: names.io,
            parent: names.object,
            methods: vec![
                method(names.out_string, &[(names.arg, names.string)], names.self_type),
                method(names.out_int, &[(names.arg, names.int)], names.self_type),
                method(names.in_string, &[], names.string),
                method(names.in_int, &[], names.int),
            ],
            attributes: vec![],
            file: names.basic_class_file,
            span: None,
        };

        let int = ClassInfo {
            name: names.int,
            parent: names.object,
            methods: vec![],
            attributes: vec![attribute(names.val, names.prim_slot)],
            file: names.basic_class_file,
            span: None,
        };

        let boolean = ClassInfo {
            name: names.boolean,
            parent: names.object,
            methods: vec![],
            attributes: vec![attribute(names.val, names.prim_slot)],
            file: names.basic_class_file,
            span: None,
        };

        let string = ClassInfo {
            name: names.string,
            parent: names.object,
            methods: vec![
                method(names.length, &[], names.int),
                method(names.concat, &[(names.arg, names.string)], names.string),
                method(
                    names.substr,
                    &[(names.arg, names.int), (names.arg2, names.int)],
                    names.string,
                ),
            ],
            attributes: vec![
                attribute(names.val, names.int),
                attribute(names.str_field, names.prim_slot),
            ],
            file: names.basic_class_file,
            span: None,
        };

        for info in [object, io, int, boolean, string] {
            self.classes.insert(info.name, info);
        }
    }

    /// Looks up a class by name.
    #[must_use]
    pub fn get(&self, name: Symbol) -> Option<&ClassInfo> {
        self.classes.get(&name)
    }

    /// Whether `name` is a declared (or built-in) class.
    #[must_use]
    pub fn contains(&self, name: Symbol) -> bool {
        self.classes.contains_key(&name)
    }

    /// True iff `parent` is `target` or appears on `target`'s chain up to
    /// `Object`. Unknown names terminate the walk as "not found".
    #[must_use]
    pub fn is_ancestor(&self, parent: Symbol, mut target: Symbol) -> bool {
        if parent == target {
            return true;
        }
        while target != self.no_class {
            let Some(info) = self.classes.get(&target) else {
                return false;
            };
            target = info.parent;
            if parent == target {
                return true;
            }
        }
        false
    }

    /// The nearest common ancestor of two classes.
    ///
    /// Walks `a`'s chain root-ward, returning the first entry that is an
    /// ancestor of `b`. Always resolvable for valid class names since all
    /// chains terminate at `Object`.
    #[must_use]
    pub fn join(&self, a: Symbol, b: Symbol) -> Symbol {
        let mut candidate = a;
        while candidate != self.no_class {
            if self.is_ancestor(candidate, b) {
                return candidate;
            }
            match self.classes.get(&candidate) {
                Some(info) => candidate = info.parent,
                None => break,
            }
        }
        self.object
    }

    /// Resolves a method against a class, searching its own features first
    /// and then the ancestor chain. Both dispatch forms route through this.
    #[must_use]
    pub fn resolve_method(&self, class: Symbol, method: Symbol) -> Option<&MethodInfo> {
        let mut current = class;
        while current != self.no_class {
            let info = self.classes.get(&current)?;
            if let Some(found) = info.methods.iter().find(|m| m.name == method) {
                return Some(found);
            }
            current = info.parent;
        }
        None
    }
}

fn error_at(class: &ClassDecl, interner: &Interner, kind: SemanticErrorKind) -> SemanticError {
    SemanticError::new(
        Some(ErrorLocation {
            file: interner.resolve(class.file).to_string(),
            line: class.span.start.line,
        }),
        kind,
    )
}
