use super::card::{card, card_content, card_header, card_title};
use crate::site::Project;
use maud::{html, Markup};

fn project_card(index: usize, project: &Project) -> Markup {
    card(
        "bg-gradient-to-br from-[#f2f2f2] to-white shadow-lg hover:shadow-xl transition-shadow",
        html! {
            (card_header("pb-2", card_title("text-[#0D324D]", &project.title)))
            (card_content("", html! {
                p class="text-[#0D324D] mb-4" { (project.description) }
                a href=(project.repo) target="_blank" rel="noopener noreferrer"
                    class="text-[#0D324D] underline hover:text-[#c8d8e4]"
                    aria-label={ "View Project " (index + 1) " on GitHub" } {
                    "View on GitHub"
                }
            }))
        },
    )
}

/// Grid of project cards
pub fn projects(items: &[Project]) -> Markup {
    html! {
        section id="projects" class="py-20 bg-white" {
            h2 class="text-4xl font-bold text-center text-[#0D324D] mb-10" { "Projects" }
            div class="container mx-auto grid gap-8 grid-cols-1 sm:grid-cols-2 lg:grid-cols-4" {
                @for (index, project) in items.iter().enumerate() {
                    (project_card(index, project))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_card_per_project() {
        let items = vec![
            Project::new("Plate Vision", "Detects plates", "https://github.com/a/b"),
            Project::new("Cloth Aid", "Tracks donations", "https://github.com/a/c"),
        ];
        let markup = projects(&items).into_string();

        assert_eq!(markup.matches("View on GitHub").count(), 2);
        assert!(markup.contains(r#"href="https://github.com/a/c""#));
        assert!(markup.contains(r#"aria-label="View Project 2 on GitHub""#));
        assert!(markup.contains(r#"id="projects""#));
    }

    #[test]
    fn test_description_is_escaped() {
        let items = vec![Project::new("X", "<script>alert(1)</script>", "https://x.io")];
        let markup = projects(&items).into_string();
        assert!(markup.contains("&lt;script&gt;"));
        assert!(!markup.contains("<script>"));
    }
}
