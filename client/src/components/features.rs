//! Landing page feature grid.

use leptos::prelude::*;

struct Feature {
    name: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        name: "Accurate Detection",
        description: "Advanced AI algorithms provide highly accurate melanoma detection results.",
    },
    Feature {
        name: "Real-time Analysis",
        description: "Get instant results with our powerful real-time image processing system.",
    },
    Feature {
        name: "Expert Validation",
        description: "All results are validated against established medical databases.",
    },
    Feature {
        name: "Quick Results",
        description: "Receive comprehensive reports within minutes of image upload.",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="features__header">
                <h2 class="features__eyebrow">"Features"</h2>
                <p class="features__title">"Advanced Melanoma Detection"</p>
                <p class="features__lead">
                    "Our system combines cutting-edge technology with medical expertise to provide accurate and reliable results."
                </p>
            </div>
            <div class="features__grid">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="feature-card">
                                <h3 class="feature-card__name">{feature.name}</h3>
                                <p class="feature-card__description">{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
