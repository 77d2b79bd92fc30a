//! Buttons allow your users to perform actions by clicking them.
//!
//! # Example
//! ```
//! use bulma_ui_widget::button;
//! use bulma_ui_widget::core::{Color, Element};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Message {
//!     Save,
//! }
//!
//! let save: Element<'_, Message> = button("Save")
//!     .color(Color::Primary)
//!     .on_click(Message::Save)
//!     .into();
//!
//! assert_eq!(
//!     save.view().to_string(),
//!     r#"<button class="is-primary button" tabindex="0">Save</button>"#
//! );
//! assert_eq!(save.click(), Some(Message::Save));
//! ```
use crate::core::{Attributes, Color, Element, Modifiers, Node, Size, SmolStr, Target, Value};

use super::{Configuration, State};

/// A button that produces a message when clicked.
///
/// The [`Button`] only computes classes, attributes and the render target;
/// converting it into an [`Element`] produces the actual output.
///
/// If the [`Button`] is disabled, no message is produced even if a
/// handler was set:
///
/// ```
/// use bulma_ui_widget::core::Element;
/// use bulma_ui_widget::button;
///
/// let delete: Element<'_, &str> = button("Delete")
///     .on_click("delete")
///     .disabled(true)
///     .into();
///
/// assert_eq!(delete.click(), None);
/// ```
pub struct Button<'a, Message> {
    configuration: Configuration,
    render_as: Option<Target>,
    attributes: Attributes,
    children: Vec<Node>,
    on_click: Option<OnClick<'a, Message>>,
}

enum OnClick<'a, Message> {
    Direct(Message),
    Closure(Box<dyn Fn() -> Message + 'a>),
}

impl<'a, Message> Button<'a, Message> {
    /// Creates a new [`Button`] without content.
    pub fn new() -> Self {
        Self::from_configuration(Configuration::default())
    }

    /// Creates a new [`Button`] with the given [`Configuration`].
    pub fn from_configuration(configuration: Configuration) -> Self {
        Self {
            configuration,
            render_as: None,
            attributes: Attributes::new(),
            children: Vec::new(),
            on_click: None,
        }
    }

    /// Returns the [`Configuration`] of the [`Button`].
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Sets what the [`Button`] is rendered as, instead of a `button` tag.
    ///
    /// Ignored when the [`Button`] is static.
    #[must_use]
    pub fn render_as(mut self, target: impl Into<Target>) -> Self {
        self.render_as = Some(target.into());
        self
    }

    /// Sets the [`Color`] of the [`Button`].
    #[must_use]
    pub fn color(self, color: Color) -> Self {
        self.color_maybe(Some(color))
    }

    /// Sets the [`Color`] of the [`Button`], if `Some`.
    #[must_use]
    pub fn color_maybe(mut self, color: Option<Color>) -> Self {
        self.configuration.color = color;
        self
    }

    /// Sets the [`Color`] of the [`Button`] by name.
    ///
    /// An empty name clears the color. Unknown names are logged and
    /// ignored.
    #[must_use]
    pub fn color_name(self, name: &str) -> Self {
        if name.is_empty() {
            return self.color_maybe(None);
        }

        match name.parse() {
            Ok(color) => self.color(color),
            Err(error) => {
                log::warn!("Button: {error}, keeping previous color");
                self
            }
        }
    }

    /// Sets the [`Size`] of the [`Button`].
    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.configuration.size = Some(size);
        self
    }

    /// Sets the [`Size`] of the [`Button`] by name.
    ///
    /// Unknown names are logged and ignored.
    #[must_use]
    pub fn size_name(self, name: &str) -> Self {
        match name.parse() {
            Ok(size) => self.size(size),
            Err(error) => {
                log::warn!("Button: {error}, keeping previous size");
                self
            }
        }
    }

    /// Forces the [`State`] of the [`Button`].
    #[must_use]
    pub fn state(mut self, state: State) -> Self {
        self.configuration.state = Some(state);
        self
    }

    /// Forces the [`State`] of the [`Button`] by name.
    ///
    /// Unknown names are logged and ignored.
    #[must_use]
    pub fn state_name(self, name: &str) -> Self {
        match name.parse() {
            Ok(state) => self.state(state),
            Err(error) => {
                log::warn!("Button: {error}, keeping previous state");
                self
            }
        }
    }

    /// Sets whether the [`Button`] only has an outline.
    #[must_use]
    pub fn outlined(mut self, outlined: bool) -> Self {
        self.configuration.outlined = outlined;
        self
    }

    /// Sets whether the [`Button`] uses inverted colors.
    ///
    /// Useful when the [`Button`] sits on a colored background.
    #[must_use]
    pub fn inverted(mut self, inverted: bool) -> Self {
        self.configuration.inverted = inverted;
        self
    }

    /// Sets whether the [`Button`] fills the width of its parent.
    #[must_use]
    pub fn fullwidth(mut self, fullwidth: bool) -> Self {
        self.configuration.fullwidth = fullwidth;
        self
    }

    /// Sets whether the [`Button`] has fully rounded corners.
    #[must_use]
    pub fn rounded(mut self, rounded: bool) -> Self {
        self.configuration.rounded = rounded;
        self
    }

    /// Sets whether the [`Button`] looks like underlined text.
    #[must_use]
    pub fn text(mut self, text: bool) -> Self {
        self.configuration.text = text;
        self
    }

    /// Sets whether the [`Button`] is a `delete` cross.
    #[must_use]
    pub fn remove(mut self, remove: bool) -> Self {
        self.configuration.remove = remove;
        self
    }

    /// Sets whether the [`Button`] is selected.
    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.configuration.is_selected = selected;
        self
    }

    /// Sets whether the [`Button`] is a non-interactive `span`.
    #[must_use]
    pub fn static_(mut self, is_static: bool) -> Self {
        self.configuration.is_static = is_static;
        self
    }

    /// Sets whether the [`Button`] submits its form.
    #[must_use]
    pub fn submit(mut self, submit: bool) -> Self {
        self.configuration.submit = submit;
        self
    }

    /// Sets whether the [`Button`] resets its form.
    #[must_use]
    pub fn reset(mut self, reset: bool) -> Self {
        self.configuration.reset = reset;
        self
    }

    /// Sets the loading flag of the [`Button`].
    ///
    /// The flag has no visual effect; use [`State::Loading`] instead.
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.configuration.loading = loading;
        self
    }

    /// Sets whether the [`Button`] is disabled.
    ///
    /// A disabled [`Button`] leaves the tab order and never produces a
    /// message.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.configuration.disabled = disabled;
        self
    }

    /// Sets extra classes, written before the computed ones.
    ///
    /// The classes are split on whitespace and a class that appears more
    /// than once, here or among the computed ones, keeps its first
    /// position.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.configuration.class_name = Some(class.into());
        self
    }

    /// Sets the [`Modifiers`] of the [`Button`].
    #[must_use]
    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.configuration.modifiers = modifiers;
        self
    }

    /// Sets an extra attribute, forwarded as is.
    ///
    /// `tabindex`, `disabled` and `class` are always computed by the
    /// [`Button`], and so is `type` for submit and reset buttons.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<SmolStr>, value: impl Into<Value>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Appends a child to the [`Button`].
    #[must_use]
    pub fn push(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends every child of the iterator to the [`Button`].
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Sets the message produced when the [`Button`] is clicked.
    #[must_use]
    pub fn on_click(mut self, on_click: Message) -> Self {
        self.on_click = Some(OnClick::Direct(on_click));
        self
    }

    /// Sets the message produced when the [`Button`] is clicked.
    ///
    /// This is analogous to [`Button::on_click`], but the closure only runs
    /// when the [`Button`] is actually clicked.
    #[must_use]
    pub fn on_click_with(mut self, on_click: impl Fn() -> Message + 'a) -> Self {
        self.on_click = Some(OnClick::Closure(Box::new(on_click)));
        self
    }

    /// Sets the message produced when the [`Button`] is clicked, if `Some`.
    #[must_use]
    pub fn on_click_maybe(mut self, on_click: Option<Message>) -> Self {
        self.on_click = on_click.map(OnClick::Direct);
        self
    }
}

impl<Message> Default for Button<'_, Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, Message> From<Button<'a, Message>> for Element<'a, Message>
where
    Message: 'a,
{
    fn from(button: Button<'a, Message>) -> Self {
        let Button {
            configuration,
            render_as,
            mut attributes,
            children,
            on_click,
        } = button;

        if attributes.remove("class").is_some() {
            log::warn!("Button: ignoring `class` attribute, use `Button::class` instead");
        }

        let (target, kind) = configuration.target(render_as);

        let mut element = Element::new(target)
            .with_attributes(attributes)
            .attribute("tabindex", configuration.tab_index())
            .attribute("disabled", configuration.disabled)
            .class(configuration.classes())
            .modifiers(configuration.modifiers)
            .with_children(children);

        if let Some(kind) = kind {
            element = element.attribute("type", kind.as_str());
        }

        if configuration.disabled {
            return element;
        }

        match on_click {
            Some(OnClick::Direct(message)) => element.on_click(message),
            Some(OnClick::Closure(f)) => element.on_click_with(f),
            None => element,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Component, Helpers};
    use crate::button;

    use std::cell::Cell;

    fn render(button: Button<'_, ()>) -> Element<'_, ()> {
        button.into()
    }

    fn class_of(element: &Element<'_, ()>) -> String {
        element
            .view()
            .attribute("class")
            .and_then(Value::as_text)
            .unwrap_or_default()
            .to_owned()
    }

    struct RouterLink;

    impl Component for RouterLink {
        fn name(&self) -> &str {
            "RouterLink"
        }

        fn view(&self, attributes: Attributes, children: Vec<Node>) -> Node {
            Node::Element {
                tag: "a".into(),
                attributes: attributes.with("href", "/"),
                children,
            }
        }
    }

    #[test]
    fn test_default_render() {
        let element = render(button("Click"));

        assert_eq!(
            element.view().to_string(),
            r#"<button class="button" tabindex="0">Click</button>"#
        );
        assert_eq!(
            element.attributes().get("disabled").and_then(Value::as_bool),
            Some(false)
        );
        assert_eq!(element.children(), [Node::from("Click")]);
    }

    #[test]
    fn test_color_classes() {
        let element = render(Button::new());
        assert!(!class_of(&element).contains("is-"));

        for color in Color::ALL {
            let element = render(Button::new().color(color));
            let class = class_of(&element);

            let colors: Vec<_> = class
                .split(' ')
                .filter(|token| Color::ALL.iter().any(|c| *token == format!("is-{c}")))
                .collect();

            assert_eq!(colors, [format!("is-{color}")]);
        }
    }

    #[test]
    fn test_size_and_state_classes() {
        for size in Size::ALL {
            let class = class_of(&render(Button::new().size(size)));

            let sizes: Vec<_> = class
                .split(' ')
                .filter(|token| Size::ALL.iter().any(|s| *token == format!("is-{s}")))
                .collect();

            assert_eq!(sizes, [format!("is-{size}")]);
        }

        for state in State::ALL {
            let class = class_of(&render(Button::new().state(state)));

            let states: Vec<_> = class
                .split(' ')
                .filter(|token| State::ALL.iter().any(|s| *token == format!("is-{s}")))
                .collect();

            assert_eq!(states, [format!("is-{state}")]);
        }
    }

    #[test]
    fn test_delete_or_button() {
        for remove in [false, true] {
            let element = render(Button::new().remove(remove).rounded(true));
            let class = class_of(&element);
            let tokens: Vec<_> = class.split(' ').collect();

            assert_eq!(tokens.contains(&"delete"), remove);
            assert_eq!(tokens.contains(&"button"), !remove);
        }
    }

    #[test]
    fn test_disabled_drops_click_handler() {
        let calls = Cell::new(0);

        let element: Element<'_, u32> = button("Go")
            .on_click_with(|| {
                calls.set(calls.get() + 1);
                1
            })
            .disabled(true)
            .into();

        assert_eq!(element.click(), None);
        assert!(!element.is_clickable());
        assert_eq!(calls.get(), 0);
        assert_eq!(
            element.attributes().get("tabindex"),
            Some(&Value::Integer(-1))
        );
        assert_eq!(
            element.view().to_string(),
            r#"<button class="button" disabled tabindex="-1">Go</button>"#
        );
    }

    #[test]
    fn test_enabled_forwards_click_handler() {
        let element: Element<'_, &str> = button("Go").on_click("go").into();

        assert_eq!(element.click(), Some("go"));
        assert_eq!(element.click(), Some("go"));
        assert_eq!(
            element.attributes().get("tabindex"),
            Some(&Value::Integer(0))
        );
    }

    #[test]
    fn test_enabled_forwards_click_closure() {
        let calls = Cell::new(0);

        let element: Element<'_, u32> = button("Go")
            .on_click_with(|| {
                calls.set(calls.get() + 1);
                calls.get()
            })
            .into();

        assert!(element.is_clickable());
        assert_eq!(calls.get(), 0);
        assert_eq!(element.click(), Some(1));
        assert_eq!(element.click(), Some(2));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_on_click_maybe() {
        let element: Element<'_, u8> = Button::new().on_click(1).on_click_maybe(None).into();
        assert_eq!(element.click(), None);
    }

    #[test]
    fn test_submit() {
        let element = render(Button::new().submit(true));

        assert!(element.target().is_tag("button"));
        assert_eq!(
            element.attributes().get("type").and_then(Value::as_text),
            Some("submit")
        );

        let element = render(Button::new().submit(true).render_as("input"));
        assert!(element.target().is_tag("input"));
    }

    #[test]
    fn test_reset_and_static() {
        let element = render(Button::new().reset(true).static_(true).render_as("a"));

        assert!(element.target().is_tag("span"));
        assert_eq!(element.attributes().get("type"), None);
        assert!(class_of(&element).contains("is-static"));
    }

    #[test]
    fn test_type_attribute_passes_through() {
        let element = render(Button::new().attribute("type", "button"));
        assert_eq!(
            element.attributes().get("type").and_then(Value::as_text),
            Some("button")
        );

        let element = render(Button::new().attribute("type", "button").reset(true));
        assert_eq!(
            element.attributes().get("type").and_then(Value::as_text),
            Some("reset")
        );
    }

    #[test]
    fn test_computed_attributes_win() {
        let element = render(
            Button::new()
                .attribute("tabindex", 5)
                .attribute("disabled", true)
                .attribute("class", "sneaky")
                .attribute("aria-label", "Close")
                .class("mine"),
        );

        let node = element.view();

        assert_eq!(node.attribute("tabindex"), Some(&Value::Integer(0)));
        assert_eq!(node.attribute("disabled"), Some(&Value::Bool(false)));
        assert_eq!(
            node.attribute("class").and_then(Value::as_text),
            Some("mine button")
        );
        assert_eq!(
            node.attribute("aria-label").and_then(Value::as_text),
            Some("Close")
        );
    }

    #[test]
    fn test_loading_flag_adds_no_class() {
        let element = render(Button::new().loading(true));
        assert_eq!(class_of(&element), "button");

        let element = render(Button::new().state(State::Loading));
        assert_eq!(class_of(&element), "is-loading button");
    }

    #[test]
    fn test_caller_classes_come_first() {
        let element = render(Button::new().class("  left  right ").outlined(true));
        assert_eq!(class_of(&element), "left right is-outlined button");

        let element = render(Button::new().class(""));
        assert_eq!(class_of(&element), "button");

        let element = render(Button::new().class("button wide\twide").rounded(true));
        assert_eq!(class_of(&element), "button wide is-rounded");
    }

    #[test]
    fn test_modifier_classes() {
        let element = render(
            Button::new()
                .size(Size::Small)
                .modifiers(Modifiers::new().helpers(Helpers::SHADOWLESS)),
        );

        assert_eq!(class_of(&element), "is-small button is-shadowless");
    }

    #[test]
    fn test_render_as_component() {
        let element = render(
            button("Home")
                .render_as(Target::component(RouterLink))
                .color(Color::Link),
        );

        assert_eq!(element.target().name(), "RouterLink");
        assert_eq!(
            element.view().to_string(),
            r#"<a class="is-link button" href="/" tabindex="0">Home</a>"#
        );
    }

    #[test]
    fn test_static_ignores_component_target() {
        let element = render(Button::new().render_as(Target::component(RouterLink)).static_(true));
        assert!(element.target().is_tag("span"));
    }

    #[test]
    fn test_lenient_names() {
        let button = Button::<()>::new()
            .color_name("warning")
            .color_name("fuchsia")
            .size_name("medium")
            .size_name("huge")
            .state_name("hover")
            .state_name("pressed");

        assert_eq!(button.configuration().color, Some(Color::Warning));
        assert_eq!(button.configuration().size, Some(Size::Medium));
        assert_eq!(button.configuration().state, Some(State::Hover));

        let button = button.color_name("");
        assert_eq!(button.configuration().color, None);
    }

    #[test]
    fn test_idempotent() {
        let configuration = Configuration {
            color: Some(Color::Success),
            submit: true,
            disabled: true,
            ..Configuration::default()
        };

        let first = render(Button::from_configuration(configuration.clone()).push("Ok"));
        let second = render(Button::from_configuration(configuration).push("Ok"));

        assert_eq!(first.view(), second.view());
        assert_eq!(first.view(), first.view());
    }
}
