//! Helper functions to create widgets.
use crate::button::Button;
use crate::core::Node;

/// Creates a new [`Button`] with the given content.
///
/// ```
/// use bulma_ui_widget::button;
/// use bulma_ui_widget::core::Element;
///
/// let element: Element<'_, ()> = button("Cancel").text(true).into();
///
/// assert_eq!(
///     element.view().to_string(),
///     r#"<button class="is-text button" tabindex="0">Cancel</button>"#
/// );
/// ```
pub fn button<'a, Message>(content: impl Into<Node>) -> Button<'a, Message> {
    Button::new().push(content)
}
