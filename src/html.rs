//! Shared page layout, modal shell and Tailwind class constants.

use maud::{DOCTYPE, Markup, html};

use crate::{currency, loading_bar::LoadingBar};

// Link styles
pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-blue-500
    dark:bg-blue-600 disabled:bg-blue-300 disabled:cursor-not-allowed \
    hover:enabled:bg-blue-600 hover:enabled:dark:bg-blue-700 text-white rounded";

pub const BUTTON_SECONDARY_STYLE: &str = "w-full px-4 py-2 \
    text-sm font-medium text-gray-900 bg-white rounded border border-gray-200 \
    hover:bg-gray-100 hover:text-blue-700 focus:z-10 dark:bg-gray-800 \
    dark:text-gray-400 dark:border-gray-600 dark:hover:text-white \
    dark:hover:bg-gray-700";

pub const BUTTON_DELETE_STYLE: &str = "text-red-600 hover:text-red-500 \
    dark:text-red-500 dark:hover:text-red-400 underline bg-transparent \
    border-none cursor-pointer";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 read-only:text-gray-500 \
    bg-gray-50 dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";
pub const FORM_CURRENCY_INPUT_STYLE: &str = "block w-full py-2.5 pl-9 pr-2.5 rounded text-sm \
    text-gray-900 dark:text-white read-only:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    focus:ring-blue-600 focus:border-blue-600";

// Table styles
pub const TABLE_STYLE: &str = "w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400";

pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white";

/// The ID of the element that modals are swapped into.
pub const MODAL_CONTAINER_ID: &str = "modal-container";

/// The ID of the backdrop behind an open modal.
pub const MODAL_OVERLAY_ID: &str = "modal-overlay";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="id"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - KasirIn" }

                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4/response-targets.js" {}

                style
                {
                    r#"
                    #indicator.htmx-indicator {
                        display: none;
                    }

                    #indicator.htmx-request .htmx-indicator {
                        display: inline;
                    }

                    #indicator.htmx-request.htmx-indicator {
                        display: inline;
                    }
                    "#
                }

                script src="/static/app.js" defer {}
            }

            body
                hx-ext="response-targets"
                hx-target-error="#alert-container"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900 pb-[calc(5rem+env(safe-area-inset-bottom))] lg:pb-0"
            {
                (content)

                div id=(MODAL_CONTAINER_ID) {}

                // Alert container for out-of-band swaps
                div
                    id="alert-container"
                    class="w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

/// A page with a heading, a button that opens the create modal, and a table
/// that loads itself from `table_url` on page load and whenever `refresh_event`
/// is triggered.
pub fn table_page(
    heading: &str,
    nav_bar: &Markup,
    new_button_text: &str,
    new_modal_url: &str,
    new_modal_method: HxMethod,
    table_url: &str,
    refresh_event: &str,
) -> Markup {
    let content = html!(
        (nav_bar)

        (LoadingBar::start().into_html())

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="relative w-full max-w-5xl"
            {
                div class="flex justify-between flex-wrap items-end mb-4"
                {
                    h1 class="text-xl font-bold" { (heading) }

                    button
                        type="button"
                        hx-get=[new_modal_method.get(new_modal_url)]
                        hx-post=[new_modal_method.post(new_modal_url)]
                        hx-target={"#" (MODAL_CONTAINER_ID)}
                        class=(LINK_STYLE)
                    {
                        (new_button_text)
                    }
                }

                div
                    id="table-container"
                    class="dark:bg-gray-800 overflow-x-auto"
                    hx-get=(table_url)
                    hx-trigger={"load, " (refresh_event) " from:body"}
                {
                    p class="text-gray-500 dark:text-gray-400" { "Loading..." }
                }
            }
        }
    );

    base(heading, &content)
}

/// The HTTP method an htmx element uses for its request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HxMethod {
    Get,
    Post,
    Delete,
}

impl HxMethod {
    fn get(self, url: &str) -> Option<&str> {
        (self == HxMethod::Get).then_some(url)
    }

    fn post(self, url: &str) -> Option<&str> {
        (self == HxMethod::Post).then_some(url)
    }

    fn delete(self, url: &str) -> Option<&str> {
        (self == HxMethod::Delete).then_some(url)
    }
}

/// How a modal asks the server to close it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalClose {
    pub method: HxMethod,
    /// The URL for the close and cancel buttons.
    pub cancel_url: String,
    /// The URL for pressing the mouse outside the modal.
    pub outside_click_url: String,
}

impl ModalClose {
    /// Close with the same URL no matter how the modal was dismissed.
    pub fn get(url: &str) -> Self {
        Self {
            method: HxMethod::Get,
            cancel_url: url.to_owned(),
            outside_click_url: url.to_owned(),
        }
    }
}

/// A modal dialog on a dimmed backdrop.
///
/// Pressing the mouse on the backdrop, but not inside the dialog, issues the
/// outside click request. The listener lives on the backdrop, so it only
/// exists while the modal is in the page.
pub fn modal(title: &str, close: &ModalClose, body: &Markup) -> Markup {
    html!(
        div
            id=(MODAL_OVERLAY_ID)
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/50"
            hx-trigger={"mousedown[target.id=='" (MODAL_OVERLAY_ID) "']"}
            hx-get=[close.method.get(&close.outside_click_url)]
            hx-delete=[close.method.delete(&close.outside_click_url)]
            hx-target={"#" (MODAL_CONTAINER_ID)}
        {
            div
                id="modal"
                role="dialog"
                aria-modal="true"
                class="w-full max-w-3xl max-h-screen overflow-y-auto bg-white rounded-xl shadow dark:bg-gray-800"
            {
                div class="flex items-center justify-between p-4 md:p-5 border-b rounded-t border-gray-200 dark:border-gray-700"
                {
                    h3 class="text-xl font-semibold text-gray-900 dark:text-white" { (title) }

                    (close_button(close, html!(
                        span aria-hidden="true" { "✕" }
                        span class="sr-only" { "Close modal" }
                    ), "text-gray-400 bg-transparent hover:bg-gray-200 hover:text-gray-900 rounded-lg text-sm w-8 h-8 ms-auto inline-flex justify-center items-center"))
                }

                div class="p-4 md:p-5 text-gray-900 dark:text-white" { (body) }
            }
        }
    )
}

/// A button that dismisses the modal like the close button in its header.
pub fn cancel_button(close: &ModalClose) -> Markup {
    close_button(close, html!("Cancel"), BUTTON_SECONDARY_STYLE)
}

fn close_button(close: &ModalClose, label: Markup, style: &str) -> Markup {
    html!(
        button
            type="button"
            hx-get=[close.method.get(&close.cancel_url)]
            hx-delete=[close.method.delete(&close.cancel_url)]
            hx-target={"#" (MODAL_CONTAINER_ID)}
            class=(style)
        {
            (label)
        }
    )
}

/// A text input that shows an amount grouped with `.` and keeps it grouped while typing.
pub fn currency_input(name: &str, id: &str, amount: Option<u64>, read_only: bool) -> Markup {
    let value = amount.map(currency::format).unwrap_or_default();

    html!(
        div class="relative"
        {
            span class="absolute left-3 top-1/2 -translate-y-1/2 text-sm" { "Rp" }

            input
                type="text"
                inputmode="numeric"
                name=(name)
                id=(id)
                value=(value)
                placeholder="0"
                autocomplete="off"
                data-currency-input
                required[!read_only]
                readonly[read_only]
                class=(FORM_CURRENCY_INPUT_STYLE);
        }
    )
}

/// A drop-down list of `(value, label)` options.
///
/// The placeholder stays selected until one of the options matches `selected`.
pub fn select_input(
    name: &str,
    id: &str,
    placeholder: &str,
    options: &[(&str, &str)],
    selected: &str,
    disabled: bool,
) -> Markup {
    let has_selection = options.iter().any(|(value, _)| *value == selected);

    html!(
        select
            name=(name)
            id=(id)
            required[!disabled]
            disabled[disabled]
            class=(FORM_TEXT_INPUT_STYLE)
        {
            option value="" disabled hidden selected[!has_selection] { (placeholder) }

            @for (value, label) in options {
                option value=(value) selected[*value == selected] { (label) }
            }
        }
    )
}

/// A paragraph for a validation error shown inside a form.
pub fn form_error(message: Option<&str>) -> Markup {
    html!(
        @if let Some(message) = message {
            p class="text-red-500 text-base" { (message) }
        }
    )
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to Dashboard"
                    }
                }
            }
        }
    );

    base(title, &content)
}
