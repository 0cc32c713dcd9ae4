//! Per-class driving loop and the two error checkpoints.

use cool_ast::{ClassDecl, Feature};

use crate::checker::core::TypeChecker;
use crate::diagnostics::SemanticErrors;
use crate::scope::ScopeStack;

impl TypeChecker<'_> {
    /// Checks one class: binds the full ancestor chain into fresh scope
    /// stacks, then validates each feature in declaration order.
    pub fn check_class(&mut self, class: &mut ClassDecl) {
        self.current_class = class.name;
        self.current_file = class.file;
        self.attributes = ScopeStack::new();
        self.methods = ScopeStack::new();

        self.bind_ancestry(class.name);

        for feature in &mut class.features {
            // One scope pair per feature, so formals never leak.
            self.methods.enter_scope();
            self.attributes.enter_scope();
            match feature {
                Feature::Method(method) => self.check_method(method),
                Feature::Attribute(attribute) => self.check_attribute(attribute),
            }
            self.attributes.exit_scope();
            self.methods.exit_scope();
        }
    }

    /// Final checkpoint: succeeds only when no error was recorded.
    pub fn finish(self) -> Result<(), SemanticErrors> {
        if self.diagnostics.has_errors() {
            Err(SemanticErrors::new(self.diagnostics.into_errors()))
        } else {
            Ok(())
        }
    }
}
