//! Render any tag or component with a bag of attributes.
use crate::{Attributes, Classes, Modifiers, Node, Value};

use smol_str::SmolStr;

use std::fmt;
use std::rc::Rc;

/// A custom component that an [`Element`] can be rendered as.
///
/// The component receives the final attributes (with the merged `class`)
/// and the children of the [`Element`], and decides what to produce.
///
/// ```
/// use bulma_ui_core::{Attributes, Component, Node};
///
/// struct Link {
///     href: &'static str,
/// }
///
/// impl Component for Link {
///     fn name(&self) -> &str {
///         "Link"
///     }
///
///     fn view(&self, attributes: Attributes, children: Vec<Node>) -> Node {
///         Node::Element {
///             tag: "a".into(),
///             attributes: attributes.with("href", self.href),
///             children,
///         }
///     }
/// }
/// ```
pub trait Component {
    /// Returns the name of the component, for debugging.
    fn name(&self) -> &str;

    /// Produces the [`Node`] of the component.
    fn view(&self, attributes: Attributes, children: Vec<Node>) -> Node;
}

/// What an [`Element`] is rendered as.
#[derive(Clone)]
pub enum Target {
    /// An intrinsic tag, like `button` or `span`.
    Tag(SmolStr),
    /// An injected [`Component`].
    Component(Rc<dyn Component>),
}

impl Target {
    /// Creates a [`Target::Tag`].
    pub fn tag(tag: impl Into<SmolStr>) -> Self {
        Target::Tag(tag.into())
    }

    /// Creates a [`Target::Component`].
    pub fn component(component: impl Component + 'static) -> Self {
        Target::Component(Rc::new(component))
    }

    /// Returns the tag name or the component name.
    pub fn name(&self) -> &str {
        match self {
            Target::Tag(tag) => tag.as_str(),
            Target::Component(component) => component.name(),
        }
    }

    /// Returns `true` if the [`Target`] is the given intrinsic tag.
    pub fn is_tag(&self, tag: &str) -> bool {
        matches!(self, Target::Tag(name) if name == tag)
    }
}

impl Default for Target {
    fn default() -> Self {
        Target::tag("div")
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
            Target::Component(component) => {
                f.debug_tuple("Component").field(&component.name()).finish()
            }
        }
    }
}

impl PartialEq for Target {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Target::Tag(a), Target::Tag(b)) => a == b,
            (Target::Component(a), Target::Component(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for Target {
    fn from(tag: &str) -> Self {
        Target::tag(tag)
    }
}

enum OnClick<'a, Message> {
    Direct(Message),
    Closure(Box<dyn Fn() -> Message + 'a>),
}

impl<Message: Clone> OnClick<'_, Message> {
    fn get(&self) -> Message {
        match self {
            OnClick::Direct(message) => message.clone(),
            OnClick::Closure(f) => f(),
        }
    }
}

/// A generic element: a [`Target`] plus attributes, classes, modifiers,
/// children and an optional click handler.
///
/// Rendering an [`Element`] with [`Element::view`] produces a [`Node`].
/// The click handler is kept on the [`Element`] and triggered with
/// [`Element::click`].
pub struct Element<'a, Message> {
    target: Target,
    attributes: Attributes,
    classes: Classes,
    modifiers: Modifiers,
    children: Vec<Node>,
    on_click: Option<OnClick<'a, Message>>,
}

impl<'a, Message> Element<'a, Message> {
    /// Creates a new [`Element`] rendered as the given [`Target`].
    pub fn new(target: impl Into<Target>) -> Self {
        Self {
            target: target.into(),
            attributes: Attributes::new(),
            classes: Classes::new(),
            modifiers: Modifiers::default(),
            children: Vec::new(),
            on_click: None,
        }
    }

    /// Sets an attribute of the [`Element`].
    #[must_use]
    pub fn attribute(mut self, name: impl Into<SmolStr>, value: impl Into<Value>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Merges the given [`Attributes`]; their values win over existing ones.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes.merge(attributes);
        self
    }

    /// Appends classes to the [`Element`].
    #[must_use]
    pub fn class(mut self, class: impl Into<Classes>) -> Self {
        self.classes.extend(class.into());
        self
    }

    /// Sets the [`Modifiers`] of the [`Element`].
    #[must_use]
    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Appends a child to the [`Element`].
    #[must_use]
    pub fn push(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends every child of the iterator to the [`Element`].
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Sets the message produced when the [`Element`] is clicked.
    #[must_use]
    pub fn on_click(mut self, message: Message) -> Self {
        self.on_click = Some(OnClick::Direct(message));
        self
    }

    /// Sets a closure producing the message when the [`Element`] is clicked.
    #[must_use]
    pub fn on_click_with(mut self, f: impl Fn() -> Message + 'a) -> Self {
        self.on_click = Some(OnClick::Closure(Box::new(f)));
        self
    }

    /// Returns the [`Target`] of the [`Element`].
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Returns the raw [`Attributes`] of the [`Element`], without `class`.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns the classes of the [`Element`], without modifier classes.
    pub fn classes(&self) -> &Classes {
        &self.classes
    }

    /// Returns the children of the [`Element`].
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns `true` if a click handler is attached.
    pub fn is_clickable(&self) -> bool {
        self.on_click.is_some()
    }

    /// Produces the message of the click handler, if any.
    pub fn click(&self) -> Option<Message>
    where
        Message: Clone,
    {
        self.on_click.as_ref().map(OnClick::get)
    }

    /// Renders the [`Element`] into a [`Node`].
    ///
    /// The `class` attribute holds the classes of the [`Element`] followed
    /// by the classes of its [`Modifiers`], and is omitted when empty.
    pub fn view(&self) -> Node {
        let mut attributes = self.attributes.clone();
        let mut classes = self.classes.clone();
        classes.extend(self.modifiers.classes());

        if classes.is_empty() {
            let _ = attributes.remove("class");
        } else {
            attributes.set("class", classes.to_string());
        }

        let children = self.children.clone();

        match &self.target {
            Target::Tag(tag) => Node::Element {
                tag: tag.clone(),
                attributes,
                children,
            },
            Target::Component(component) => component.view(attributes, children),
        }
    }
}

impl<Message> fmt::Debug for Element<'_, Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("target", &self.target)
            .field("attributes", &self.attributes)
            .field("classes", &self.classes)
            .field("modifiers", &self.modifiers)
            .field("children", &self.children)
            .field("clickable", &self.is_clickable())
            .finish()
    }
}
