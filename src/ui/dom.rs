//! Browser helpers. Each one is a no-op while rendering on the server.

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Jump the window back to the top after a page swap
pub fn scroll_to_top() {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// `content` of the `<meta name="...">` tag in the document head
pub fn meta_content(name: &str) -> Option<String> {
    #[cfg(not(feature = "ssr"))]
    {
        let document = web_sys::window()?.document()?;
        let element = document
            .query_selector(&format!("meta[name=\"{}\"]", name))
            .ok()??;
        element
            .get_attribute("content")
            .filter(|content| !content.trim().is_empty())
    }
    #[cfg(feature = "ssr")]
    {
        let _ = name;
        None
    }
}

/// Scroll the element with `id` into view; smooth scrolling comes from CSS
pub fn scroll_to_id(id: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            element.scroll_into_view();
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = id;
    }
}
