//! Feature binding and validation.
//!
//! The binder walks the ancestor chain root-first, opening one scope per
//! class and registering its methods and attributes, so the innermost
//! scope always belongs to the class being checked. Validation then
//! checks each feature's formals and body against the bindings.

use cool_ast::{Attribute, Method};
use cool_core::Symbol;

use crate::checker::core::TypeChecker;
use crate::diagnostics::SemanticErrorKind;
use crate::hierarchy::{AttributeInfo, ClassInfo, MethodInfo};

impl TypeChecker<'_> {
    /// Recursively binds `class` and its ancestors, root first.
    pub(crate) fn bind_ancestry(&mut self, class: Symbol) {
        let Some(info) = self.hierarchy.get(class) else {
            return;
        };
        let info = info.clone();
        if info.parent != self.names.no_class {
            self.bind_ancestry(info.parent);
        }

        self.methods.enter_scope();
        self.attributes.enter_scope();
        for method in &info.methods {
            self.register_method(method, &info);
        }
        for attribute in &info.attributes {
            self.register_attribute(attribute, &info);
        }
    }

    /// Registers one method, validating override compatibility against any
    /// inherited definition. On a mismatch the method is not rebound, so
    /// the inherited signature stays authoritative for later lookups.
    fn register_method(&mut self, method: &MethodInfo, owner: &ClassInfo) {
        if self.methods.probe(method.name).is_some() {
            self.error_at(
                owner.file,
                owner.span,
                SemanticErrorKind::DuplicateMethod {
                    method: self.name(method.name),
                },
            );
            return;
        }

        let Some(inherited_owner) = self.methods.lookup(method.name) else {
            self.methods.define(method.name, owner.name);
            return;
        };

        let Some(inherited) = self
            .hierarchy
            .resolve_method(inherited_owner, method.name)
            .cloned()
        else {
            self.methods.define(method.name, owner.name);
            return;
        };

        if method.formals.len() != inherited.formals.len() {
            self.error_at(
                owner.file,
                owner.span,
                SemanticErrorKind::OverrideArityMismatch {
                    method: self.name(method.name),
                },
            );
            return;
        }

        let mut compatible = true;
        for (formal, original) in method.formals.iter().zip(&inherited.formals) {
            if formal.declared_type != original.declared_type {
                self.error_at(
                    owner.file,
                    owner.span,
                    SemanticErrorKind::OverrideParamMismatch {
                        method: self.name(method.name),
                        found: self.name(formal.declared_type),
                        expected: self.name(original.declared_type),
                    },
                );
                compatible = false;
            }
        }
        if method.return_type != inherited.return_type {
            self.error_at(
                owner.file,
                owner.span,
                SemanticErrorKind::OverrideReturnMismatch {
                    method: self.name(method.name),
                    found: self.name(method.return_type),
                    expected: self.name(inherited.return_type),
                },
            );
            compatible = false;
        }

        if compatible {
            self.methods.define(method.name, owner.name);
        }
    }

    /// Registers one attribute. Attributes may never be overridden, no
    /// exceptions; a declared `SELF_TYPE` binds as the owning class.
    fn register_attribute(&mut self, attribute: &AttributeInfo, owner: &ClassInfo) {
        if attribute.name == self.names.self_name {
            self.error_at(owner.file, owner.span, SemanticErrorKind::SelfAttributeName);
        } else if self.attributes.probe(attribute.name).is_some() {
            self.error_at(
                owner.file,
                owner.span,
                SemanticErrorKind::DuplicateAttribute {
                    attribute: self.name(attribute.name),
                },
            );
        } else if self.attributes.lookup(attribute.name).is_some() {
            self.error_at(
                owner.file,
                owner.span,
                SemanticErrorKind::AttributeOverride {
                    attribute: self.name(attribute.name),
                },
            );
        } else if attribute.declared_type == self.names.self_type {
            self.attributes.define(attribute.name, owner.name);
        } else {
            self.attributes.define(attribute.name, attribute.declared_type);
        }
    }

    /// Validates a method: the `Main.main` zero-formal rule, formal
    /// legality, and body conformance to the declared return type.
    pub(crate) fn check_method(&mut self, method: &mut Method) {
        if self.current_class == self.names.main_class
            && method.name == self.names.main_method
            && !method.formals.is_empty()
        {
            self.error(method.span, SemanticErrorKind::MainMethodArity);
            return;
        }

        for formal in &method.formals {
            if formal.name == self.names.self_name {
                self.error(formal.span, SemanticErrorKind::SelfFormalName);
            } else if formal.declared_type == self.names.self_type {
                self.error(
                    formal.span,
                    SemanticErrorKind::SelfTypeFormal {
                        formal: self.name(formal.name),
                    },
                );
            } else if self.attributes.probe(formal.name).is_some() {
                self.error(
                    formal.span,
                    SemanticErrorKind::DuplicateFormal {
                        formal: self.name(formal.name),
                    },
                );
            } else {
                self.attributes.define(formal.name, formal.declared_type);
            }
        }

        let body_ty = self.check_expr(&mut method.body);

        // A SELF_TYPE return type accepts only a SELF_TYPE body; everything
        // else goes through plain conformance with SELF_TYPE resolved.
        if method.return_type == self.names.self_type {
            if body_ty != self.names.self_type {
                self.error(
                    method.span,
                    SemanticErrorKind::ReturnTypeMismatch {
                        method: self.name(method.name),
                        found: self.name(body_ty),
                        declared: self.name(method.return_type),
                    },
                );
            }
        } else if !self.conforms(body_ty, method.return_type) {
            self.error(
                method.span,
                SemanticErrorKind::ReturnTypeMismatch {
                    method: self.name(method.name),
                    found: self.name(body_ty),
                    declared: self.name(method.return_type),
                },
            );
        }
    }

    /// Validates an attribute: its declared type must name a real class,
    /// and a present initializer must conform to it.
    pub(crate) fn check_attribute(&mut self, attribute: &mut Attribute) {
        let init_ty = self.check_expr(&mut attribute.init);
        let declared = self.resolve_self_type(attribute.declared_type);

        if !self.hierarchy.contains(declared) {
            self.error(
                attribute.span,
                SemanticErrorKind::UndefinedAttributeType {
                    class: self.name(declared),
                    attribute: self.name(attribute.name),
                },
            );
        }

        if init_ty != self.names.no_type && !self.conforms(init_ty, declared) {
            self.error(
                attribute.span,
                SemanticErrorKind::AttributeInitMismatch {
                    attribute: self.name(attribute.name),
                    found: self.name(self.resolve_self_type(init_ty)),
                    declared: self.name(attribute.declared_type),
                },
            );
        }
    }
}
