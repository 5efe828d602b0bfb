use leptos::prelude::*;

use crate::consts::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <p class="footer__brand">{APP_NAME}</p>
                <p class="footer__disclaimer">
                    "Screening support only. Results do not replace a diagnosis by a qualified dermatologist."
                </p>
                <p class="footer__copyright">{format!("© 2026 {APP_NAME}. All rights reserved.")}</p>
            </div>
        </footer>
    }
}
