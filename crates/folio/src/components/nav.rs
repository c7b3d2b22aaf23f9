use maud::{html, Markup};

const LINK_CLASS: &str =
    "text-white font-bold hover:text-[#c8d8e4] transition-all hover:underline active:underline";

/// In-page anchors, in page order
pub const SECTIONS: [(&str, &str); 3] = [
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#contact", "Contact"),
];

/// Sticky top bar with the site title and section anchors
pub fn nav(title: &str) -> Markup {
    html! {
        header class="bg-[#0D324D] sticky top-0 shadow-lg z-50" aria-label="Main Navigation" {
            div class="container mx-auto flex justify-between items-center p-6" {
                h1 class="text-2xl font-bold text-white" { (title) }
                nav class="flex space-x-6 text-lg" {
                    a href="#" class=(LINK_CLASS) aria-label="Go to Portfolio" { (title) }
                    @for (href, label) in SECTIONS {
                        a href=(href) class=(LINK_CLASS) aria-label={ "Go to " (label) " Section" } {
                            (label)
                        }
                    }
                }
            }
        }
    }
}
