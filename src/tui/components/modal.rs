//! Modal overlay component
//!
//! Full-screen absolutely-positioned layer that centers its children.

use iocraft::prelude::*;

/// Props for the ModalOverlay component
#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    /// Children elements to render inside the overlay
    pub children: Vec<AnyElement<'a>>,
}

/// Centers modal content over the whole screen
#[component]
pub fn ModalOverlay<'a>(props: &mut ModalOverlayProps<'a>) -> impl Into<AnyElement<'a>> {
    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
        ) {
            #(std::mem::take(&mut props.children))
        }
    }
}
