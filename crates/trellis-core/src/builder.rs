//! Generic supplier assembling components from ordered, typed arguments.
//!
//! Every component kind registers its constructors up front
//! ([`Constructible::constructors`]), each one a typed build function taking
//! the component id plus an argument tuple. A [`Builder`] records arguments
//! and post-construction modifiers; resolving it looks up the constructor
//! whose signature is exactly `(String, <argument types>...)`.
//!
//! Matching is by exact type. Passing a `&'static str` where a constructor
//! expects `String`, or a concrete model where it expects
//! `SharedModel<String>`, does not match.
//!
//! ```ignore
//! impl Constructible for Label {
//!     fn constructors() -> Constructors<Self> {
//!         Constructors::new()
//!             .with(|id, ()| Label::new(id))
//!             .with(|id, (model,): (SharedModel<String>,)| Label::with_model(id, model))
//!     }
//! }
//!
//! let label = provide::<Label>()
//!     .with_model(model::of("Hello".to_string()))
//!     .with_behavior(Arc::new(HeadlineBehavior::new(2)))
//!     .resolve("title")?;
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::behavior::SharedBehavior;
use crate::component::Component;
use crate::error::{BoxError, ConstructionCause, Error, Result};
use crate::model::SharedModel;
use crate::supplier::{ensure_id, Supplier};

/// Declared type of a constructor parameter or builder argument.
#[derive(Clone, Copy)]
pub struct ArgType {
    id: TypeId,
    name: &'static str,
}

impl ArgType {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ArgType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ArgType {}

impl fmt::Debug for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// One recorded builder argument: declared type plus value.
#[derive(Clone)]
pub struct Argument {
    ty: ArgType,
    value: Arc<dyn Any + Send + Sync>,
}

impl Argument {
    /// Argument declared as its own type.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            ty: ArgType::of::<T>(),
            value: Arc::new(value),
        }
    }

    /// Argument with an explicit declared type.
    ///
    /// If `value` is not actually a `ty`, construction fails at resolution.
    pub fn declared(ty: ArgType, value: Arc<dyn Any + Send + Sync>) -> Self {
        Self { ty, value }
    }

    pub fn ty(&self) -> ArgType {
        self.ty
    }

    /// Clone the value out if it is a `T`.
    pub fn value<T: Any + Clone>(&self) -> Option<T> {
        self.value.downcast_ref::<T>().cloned()
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argument({})", self.ty)
    }
}

/// Tuples usable as constructor argument lists.
pub trait ArgTuple: Sized {
    fn signature() -> Vec<ArgType>;

    fn extract(arguments: &[Argument]) -> Option<Self>;
}

macro_rules! impl_arg_tuple {
    ($($name:ident : $idx:tt),*) => {
        impl<$($name),*> ArgTuple for ($($name,)*)
        where
            $($name: Any + Clone + Send + Sync,)*
        {
            fn signature() -> Vec<ArgType> {
                vec![$(ArgType::of::<$name>()),*]
            }

            #[allow(unused_variables)]
            fn extract(arguments: &[Argument]) -> Option<Self> {
                if arguments.len() != Self::signature().len() {
                    return None;
                }
                Some(($(arguments[$idx].value::<$name>()?,)*))
            }
        }
    };
}

impl_arg_tuple!();
impl_arg_tuple!(A: 0);
impl_arg_tuple!(A: 0, B: 1);
impl_arg_tuple!(A: 0, B: 1, C: 2);
impl_arg_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_arg_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);

type BuildFn<C> = Arc<dyn Fn(&str, &[Argument]) -> std::result::Result<C, BoxError> + Send + Sync>;

struct Constructor<C> {
    signature: Vec<ArgType>,
    build: BuildFn<C>,
}

/// Constructors registered for one component kind.
pub struct Constructors<C> {
    entries: Vec<Constructor<C>>,
}

impl<C: 'static> Constructors<C> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register an infallible constructor for argument tuple `A`.
    pub fn with<A, F>(self, build: F) -> Self
    where
        A: ArgTuple,
        F: Fn(&str, A) -> C + Send + Sync + 'static,
    {
        self.with_fallible(move |id, args: A| Ok::<C, BoxError>(build(id, args)))
    }

    /// Register a constructor that may fail; the error becomes the
    /// construction cause.
    pub fn with_fallible<A, E, F>(mut self, build: F) -> Self
    where
        A: ArgTuple,
        E: Into<BoxError>,
        F: Fn(&str, A) -> std::result::Result<C, E> + Send + Sync + 'static,
    {
        let mut signature = vec![ArgType::of::<String>()];
        signature.extend(A::signature());
        let build: BuildFn<C> = Arc::new(
            move |id: &str, arguments: &[Argument]| -> std::result::Result<C, BoxError> {
                let values = A::extract(arguments)
                    .ok_or_else(|| BoxError::from("argument values do not match their declared types"))?;
                build(id, values).map_err(Into::into)
            },
        );
        self.entries.push(Constructor { signature, build });
        self
    }

    fn find(&self, signature: &[ArgType]) -> Option<&Constructor<C>> {
        self.entries.iter().find(|c| c.signature == signature)
    }

    /// Registered signatures, each rendered like `(String, u32)`.
    pub fn signatures(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|c| render_signature(&c.signature))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: 'static> Default for Constructors<C> {
    fn default() -> Self {
        Self::new()
    }
}

fn render_signature(signature: &[ArgType]) -> String {
    let names: Vec<&str> = signature.iter().map(ArgType::name).collect();
    format!("({})", names.join(", "))
}

/// Component kinds the [`Builder`] can construct.
pub trait Constructible: Component + Sized {
    fn constructors() -> Constructors<Self>;
}

type Modifier<C> = Arc<dyn Fn(&C) -> Result<()> + Send + Sync>;

/// Supplier accumulating arguments and modifiers for a [`Constructible`] kind.
///
/// Reusable: every `resolve` replays the same recipe with a new id.
pub struct Builder<C> {
    constructors: Arc<Constructors<C>>,
    arguments: Vec<Argument>,
    modifiers: Vec<Modifier<C>>,
    _kind: PhantomData<fn() -> C>,
}

/// Start a builder for kind `C`.
pub fn provide<C: Constructible>() -> Builder<C> {
    Builder::new()
}

/// Start a builder for kind `C` whose first argument is `model`.
pub fn provide_with_model<C, T>(model: SharedModel<T>) -> Builder<C>
where
    C: Constructible,
    T: 'static,
{
    Builder::new().with_model(model)
}

impl<C: Constructible> Builder<C> {
    pub fn new() -> Self {
        Self {
            constructors: Arc::new(C::constructors()),
            arguments: Vec::new(),
            modifiers: Vec::new(),
            _kind: PhantomData,
        }
    }

    /// Append an argument declared as its own type.
    pub fn with_argument<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.arguments.push(Argument::new(value));
        self
    }

    /// Append an argument with an explicit declared type.
    pub fn with_declared_argument(mut self, ty: ArgType, value: Arc<dyn Any + Send + Sync>) -> Self {
        self.arguments.push(Argument::declared(ty, value));
        self
    }

    /// Append a model argument, declared as `SharedModel<T>`.
    pub fn with_model<T: 'static>(self, model: SharedModel<T>) -> Self {
        self.with_argument(model)
    }

    /// Attach `behavior` to every produced component.
    pub fn with_behavior(self, behavior: SharedBehavior) -> Self {
        self.with_modifier(move |component: &C| {
            component.add_behavior(Arc::clone(&behavior));
            Ok(())
        })
    }

    /// Run `modifier` on every produced component, after construction.
    pub fn with_modifier<F>(mut self, modifier: F) -> Self
    where
        F: Fn(&C) -> Result<()> + Send + Sync + 'static,
    {
        self.modifiers.push(Arc::new(modifier));
        self
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Signature attempted on resolution, id included.
    pub fn signature(&self) -> Vec<ArgType> {
        let mut signature = Vec::with_capacity(self.arguments.len() + 1);
        signature.push(ArgType::of::<String>());
        signature.extend(self.arguments.iter().map(Argument::ty));
        signature
    }

    fn construction_error(&self, signature: &[ArgType], cause: ConstructionCause) -> Error {
        Error::Construction {
            kind: std::any::type_name::<C>(),
            arguments: render_signature(signature),
            cause,
        }
    }
}

impl<C: Constructible> Default for Builder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for Builder<C> {
    fn clone(&self) -> Self {
        Self {
            constructors: Arc::clone(&self.constructors),
            arguments: self.arguments.clone(),
            modifiers: self.modifiers.clone(),
            _kind: PhantomData,
        }
    }
}

impl<C> fmt::Debug for Builder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("kind", &std::any::type_name::<C>())
            .field("arguments", &self.arguments)
            .field("modifiers", &self.modifiers.len())
            .finish()
    }
}

impl<C: Constructible> Supplier<C> for Builder<C> {
    fn resolve(&self, id: &str) -> Result<C> {
        ensure_id(id)?;
        let signature = self.signature();

        let constructor = self.constructors.find(&signature).ok_or_else(|| {
            self.construction_error(
                &signature,
                ConstructionCause::NoMatchingConstructor {
                    available: self.constructors.signatures(),
                },
            )
        })?;

        let component = (constructor.build)(id, &self.arguments).map_err(|source| {
            self.construction_error(&signature, ConstructionCause::Instantiation(source))
        })?;

        for modifier in &self.modifiers {
            modifier(&component)?;
        }

        tracing::debug!(
            kind = std::any::type_name::<C>(),
            id,
            arguments = self.arguments.len(),
            "component constructed"
        );
        Ok(component)
    }
}
