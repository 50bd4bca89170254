use std::collections::BTreeMap;
use std::fmt;

use crate::builder::{Constructible, Constructors};
use crate::component::{Component, ComponentBase};
use crate::error::Result;
use crate::model::{self, SharedModel};
use crate::supplier::{ensure_id, Supplier};

/// Target page of a link, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRef {
    name: String,
}

impl PageRef {
    /// Reference a page by its Rust type.
    pub fn of<P: ?Sized + 'static>() -> Self {
        Self {
            name: std::any::type_name::<P>().to_string(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Multi-valued, ordered page parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParameters {
    values: BTreeMap<String, Vec<String>>,
}

impl PageParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all values of `key`.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), vec![value.into()]);
        self
    }

    /// Append a value to `key`.
    pub fn add(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.entry(key.into()).or_default().push(value.into());
        self
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn values(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |v| (key.as_str(), v.as_str())))
    }
}

/// A bookmarkable link to a page.
pub struct Link {
    base: ComponentBase,
    page: PageRef,
    parameters: PageParameters,
    body: Option<SharedModel<String>>,
}

impl Link {
    pub fn new(id: &str, page: PageRef, parameters: PageParameters) -> Self {
        Self {
            base: ComponentBase::new(id),
            page,
            parameters,
            body: None,
        }
    }

    pub fn page(&self) -> &PageRef {
        &self.page
    }

    pub fn parameters(&self) -> &PageParameters {
        &self.parameters
    }

    pub fn set_body(&mut self, body: SharedModel<String>) {
        self.body = Some(body);
    }

    /// Link text; `None` when the host should render its default body.
    pub fn body(&self) -> Result<Option<String>> {
        self.body.as_ref().map(|body| body.get()).transpose()
    }

    /// Page name followed by the query string, e.g. `Home?mode=edit`.
    pub fn href(&self) -> String {
        let query: Vec<String> = self
            .parameters
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        if query.is_empty() {
            self.page.name.clone()
        } else {
            format!("{}?{}", self.page.name, query.join("&"))
        }
    }
}

impl Component for Link {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn detach_models(&self) {
        if let Some(body) = &self.body {
            body.detach();
        }
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("base", &self.base)
            .field("page", &self.page)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

impl Constructible for Link {
    fn constructors() -> Constructors<Self> {
        Constructors::new()
            .with(|id, (page,): (PageRef,)| Link::new(id, page, PageParameters::new()))
            .with(|id, (page, parameters): (PageRef, PageParameters)| {
                Link::new(id, page, parameters)
            })
    }
}

/// Supplier of links to one page.
#[derive(Clone)]
pub struct LinkSupplier {
    page: PageRef,
    parameters: PageParameters,
    body: Option<SharedModel<String>>,
}

/// Start a link supplier for `page`.
pub fn link(page: PageRef) -> LinkSupplier {
    LinkSupplier {
        page,
        parameters: PageParameters::new(),
        body: None,
    }
}

impl LinkSupplier {
    pub fn with_parameters(mut self, parameters: PageParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_body(mut self, body: SharedModel<String>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_body_text(self, body: impl Into<String>) -> Self {
        self.with_body(model::of(body.into()))
    }

    pub fn page(&self) -> &PageRef {
        &self.page
    }

    pub fn parameters(&self) -> &PageParameters {
        &self.parameters
    }
}

impl fmt::Debug for LinkSupplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkSupplier")
            .field("page", &self.page)
            .field("parameters", &self.parameters)
            .field("has_body", &self.body.is_some())
            .finish()
    }
}

impl Supplier<Link> for LinkSupplier {
    fn resolve(&self, id: &str) -> Result<Link> {
        ensure_id(id)?;
        let mut link = Link::new(id, self.page.clone(), self.parameters.clone());
        if let Some(body) = &self.body {
            link.set_body(body.clone());
        }
        Ok(link)
    }
}
