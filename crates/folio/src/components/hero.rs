use crate::site::HeroLink;
use maud::{html, Markup};

const LINK_CLASS: &str = "border-2 border-[#0D324D] text-[#0D324D] px-4 py-2 rounded-lg \
                          hover:bg-[#c8d8e4] transition-all transform hover:scale-105";

fn hero_link(link: &HeroLink) -> Markup {
    html! {
        @if link.download {
            a href=(link.href) download class=(LINK_CLASS) aria-label={ "Download my " (link.label) } {
                (link.label)
            }
        } @else {
            a href=(link.href) target="_blank" rel="noopener noreferrer" class=(LINK_CLASS)
                aria-label={ "View my " (link.label) " Profile" } {
                (link.label)
            }
        }
    }
}

/// Banner with the owner's name, tagline and profile links
pub fn hero(owner: &str, tagline: &str, links: &[HeroLink]) -> Markup {
    html! {
        section class="text-center py-20 bg-gradient-to-br from-[#c8d8e4] to-white shadow-md" {
            h2 class="text-5xl font-bold mb-4 text-[#0D324D]" { (owner) }
            p class="text-lg text-[#0D324D]" { (tagline) }
            @if !links.is_empty() {
                div class="mt-6 flex justify-center space-x-6" {
                    @for link in links {
                        (hero_link(link))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_link_opens_new_tab() {
        let markup = hero("Ada", "Engineer", &[HeroLink::new("GitHub", "https://github.com/ada")])
            .into_string();
        assert!(markup.contains(r#"target="_blank""#));
        assert!(markup.contains(r#"rel="noopener noreferrer""#));
        assert!(markup.contains(r#"aria-label="View my GitHub Profile""#));
        assert!(!markup.contains("download"));
    }

    #[test]
    fn test_download_link() {
        let mut resume = HeroLink::new("Resume", "https://example.com/cv.pdf");
        resume.download = true;
        let markup = hero("Ada", "Engineer", &[resume]).into_string();
        assert!(markup.contains(" download "));
        assert!(!markup.contains("_blank"));
    }

    #[test]
    fn test_no_links_block_when_empty() {
        let markup = hero("Ada", "Engineer", &[]).into_string();
        assert!(!markup.contains("mt-6"));
        assert!(markup.contains("<h2 class=\"text-5xl font-bold mb-4 text-[#0D324D]\">Ada</h2>"));
    }
}
