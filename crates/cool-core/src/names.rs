//! Well-known symbols.
//!
//! The type and method names used by the runtime system, plus the reserved
//! names the semantic rules test against. Interning them up front means the
//! checker never has to touch the interner mutably.

use crate::symbol::{Interner, Symbol};

/// The fixed set of names the semantic phase recognizes.
///
/// `no_class` terminates every parent chain and can never be the name of a
/// user-defined class; `no_type` is the sentinel type of an absent
/// expression, distinct from every real class.
#[derive(Debug, Clone, Copy)]
pub struct Names {
    // Built-in classes
    pub object: Symbol,
    pub io: Symbol,
    pub int: Symbol,
    pub boolean: Symbol,
    pub string: Symbol,

    // Reserved names
    pub self_type: Symbol,
    pub self_name: Symbol,
    pub main_class: Symbol,
    pub main_method: Symbol,
    pub no_class: Symbol,
    pub no_type: Symbol,
    pub prim_slot: Symbol,
    pub basic_class_file: Symbol,

    // Built-in feature names
    pub abort_method: Symbol,
    pub type_name: Symbol,
    pub copy_method: Symbol,
    pub out_string: Symbol,
    pub out_int: Symbol,
    pub in_string: Symbol,
    pub in_int: Symbol,
    pub length: Symbol,
    pub concat: Symbol,
    pub substr: Symbol,
    pub val: Symbol,
    pub str_field: Symbol,
    pub arg: Symbol,
    pub arg2: Symbol,
}

impl Names {
    /// Interns every well-known name.
    ///
    /// Idempotent with respect to the interner: names already interned by
    /// the lexer or parser resolve to the same handles.
    pub fn install(interner: &mut Interner) -> Self {
        Self {
            object: interner.intern("Object"),
            io: interner.intern("IO"),
            int: interner.intern("Int"),
            boolean: interner.intern("Bool"),
            string: interner.intern("String"),
            self_type: interner.intern("SELF_TYPE"),
            self_name: interner.intern("self"),
            main_class: interner.intern("Main"),
            main_method: interner.intern("main"),
            no_class: interner.intern("_no_class"),
            no_type: interner.intern("_no_type"),
            prim_slot: interner.intern("_prim_slot"),
            basic_class_file: interner.intern("<basic class>"),
            abort_method: interner.intern("abort"),
            type_name: interner.intern("type_name"),
            copy_method: interner.intern("copy"),
            out_string: interner.intern("out_string"),
            out_int: interner.intern("out_int"),
            in_string: interner.intern("in_string"),
            in_int: interner.intern("in_int"),
            length: interner.intern("length"),
            concat: interner.intern("concat"),
            substr: interner.intern("substr"),
            val: interner.intern("_val"),
            str_field: interner.intern("_str_field"),
            arg: interner.intern("arg"),
            arg2: interner.intern("arg2"),
        }
    }

    /// True for the four names a user class may never inherit from.
    #[must_use]
    pub fn is_illegal_parent(&self, name: Symbol) -> bool {
        name == self.int || name == self.boolean || name == self.string || name == self.self_type
    }
}
