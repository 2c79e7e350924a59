//! Step entry row for a file attachment.

#[cfg(test)]
#[path = "attachment_test.rs"]
mod attachment_test;

use leptos::either::Either;
use leptos::prelude::*;

use crate::model::AttachmentData;
use crate::util::format::row_display;

/// Table row linking to an attached file, opened in a new tab.
///
/// The row stays mounted while its step is collapsed and is only hidden, so
/// toggling `expanded` never rebuilds the link. Image attachments render as a
/// thumbnail inside the link.
#[component]
pub fn AttachmentRow(attachment: AttachmentData, #[prop(into)] expanded: Signal<bool>) -> impl IntoView {
    let AttachmentData { filename, description, as_image } = attachment;

    let body = if as_image {
        Either::Left(view! {
            <img class="img-thumbnail" src=filename.clone() alt=description.clone() title=description/>
        })
    } else {
        Either::Right(description)
    };

    view! {
        <tr class="step_entry attachment" style:display=move || row_display(expanded.get())>
            <td class="text-uppercase text-info">"ATTACHMENT"</td>
            <td colspan="3">
                <a href=filename target="_blank">
                    {body}
                </a>
            </td>
        </tr>
    }
}
