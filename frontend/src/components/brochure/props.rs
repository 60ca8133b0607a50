use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BrochurePopupProps {
    pub open: bool,
    /// Asks the owning page to hide the popup.
    pub on_close: Callback<()>,
}
