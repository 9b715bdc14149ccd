//! Realms and their intrinsic objects.

use std::fmt;
use std::rc::Rc;

use core_types::{ErrorKind, JsError, JsObject};

use crate::error::ErrorConstructor;
use crate::prototype::PrototypeResolver;

/// The intrinsic objects of a realm.
pub struct Intrinsics {
    object_prototype: JsObject,
    function_prototype: JsObject,
    error: Rc<ErrorConstructor>,
    eval_error: Rc<ErrorConstructor>,
    range_error: Rc<ErrorConstructor>,
    reference_error: Rc<ErrorConstructor>,
    syntax_error: Rc<ErrorConstructor>,
    type_error: Rc<ErrorConstructor>,
    uri_error: Rc<ErrorConstructor>,
}

impl Intrinsics {
    /// %Object.prototype%
    pub fn object_prototype(&self) -> &JsObject {
        &self.object_prototype
    }

    /// %Function.prototype%
    pub fn function_prototype(&self) -> &JsObject {
        &self.function_prototype
    }

    /// The constructor for `kind`, e.g. %TypeError%
    pub fn error_constructor(&self, kind: ErrorKind) -> &Rc<ErrorConstructor> {
        match kind {
            ErrorKind::Error => &self.error,
            ErrorKind::EvalError => &self.eval_error,
            ErrorKind::RangeError => &self.range_error,
            ErrorKind::ReferenceError => &self.reference_error,
            ErrorKind::SyntaxError => &self.syntax_error,
            ErrorKind::TypeError => &self.type_error,
            ErrorKind::URIError => &self.uri_error,
        }
    }

    /// The prototype for `kind`, e.g. %TypeError.prototype%
    pub fn error_prototype(&self, kind: ErrorKind) -> JsObject {
        self.error_constructor(kind).prototype_object().clone()
    }
}

impl fmt::Debug for Intrinsics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intrinsics")
            .field("object_prototype", &self.object_prototype)
            .field("function_prototype", &self.function_prototype)
            .finish_non_exhaustive()
    }
}

/// A realm: one global environment's worth of intrinsics.
#[derive(Debug)]
pub struct Realm {
    intrinsics: Intrinsics,
}

impl Realm {
    /// Create the intrinsics.
    ///
    /// `Error` hangs off `Function.prototype` and `Object.prototype`; every
    /// native error constructor inherits from `Error`, and its prototype
    /// from `Error.prototype`.
    ///
    /// Each constructor and its prototype reference each other, so the
    /// intrinsics of a realm are never freed. Create one realm per global
    /// environment and construct every error through it:
    ///
    /// ```
    /// use builtins::{Agent, ErrorKind, Value};
    ///
    /// let mut agent = Agent::new().unwrap();
    /// let ctor = agent.error_constructor(ErrorKind::Error);
    /// for i in 0..100 {
    ///     let error = ctor.construct(&mut agent, &[Value::Smi(i)]).unwrap();
    ///     assert!(error.prototype().unwrap().ptr_eq(ctor.prototype_object()));
    /// }
    /// ```
    pub fn new() -> Result<Self, JsError> {
        let object_prototype = JsObject::ordinary(None);
        let function_prototype = JsObject::function(Some(object_prototype.clone()));

        let error = Rc::new(ErrorConstructor::new(
            ErrorKind::Error,
            &function_prototype,
            &object_prototype,
            default_prototype(ErrorKind::Error),
        )?);

        let native = |kind: ErrorKind| -> Result<Rc<ErrorConstructor>, JsError> {
            let constructor = ErrorConstructor::new(
                kind,
                error.function_object(),
                error.prototype_object(),
                default_prototype(kind),
            )?;
            Ok(Rc::new(constructor))
        };

        let intrinsics = Intrinsics {
            eval_error: native(ErrorKind::EvalError)?,
            range_error: native(ErrorKind::RangeError)?,
            reference_error: native(ErrorKind::ReferenceError)?,
            syntax_error: native(ErrorKind::SyntaxError)?,
            type_error: native(ErrorKind::TypeError)?,
            uri_error: native(ErrorKind::URIError)?,
            error: error.clone(),
            object_prototype,
            function_prototype,
        };
        Ok(Realm { intrinsics })
    }

    /// The realm's intrinsics
    pub fn intrinsics(&self) -> &Intrinsics {
        &self.intrinsics
    }
}

fn default_prototype(kind: ErrorKind) -> PrototypeResolver {
    Rc::new(move |intrinsics: &Intrinsics| intrinsics.error_prototype(kind))
}
