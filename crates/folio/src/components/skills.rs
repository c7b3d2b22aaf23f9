use maud::{html, Markup};

/// Wrapped row of skill chips
pub fn skills(items: &[String]) -> Markup {
    html! {
        section id="skills" class="py-20 bg-[#c8d8e4]" {
            h2 class="text-4xl font-bold text-center text-[#0D324D] mb-10" { "Skills" }
            div class="container mx-auto flex flex-wrap justify-center gap-4" {
                @for skill in items {
                    span class="bg-white px-4 py-2 rounded-full shadow-md hover:scale-105 hover:shadow-lg transition-transform text-[#0D324D]" {
                        (skill)
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
    fn test_chip_per_skill_in_order() {
        let items: Vec<String> = ["Rust", "SQLite", "C Programming"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let markup = skills(&items).into_string();

        assert_eq!(markup.matches("<span").count(), 3);
        let rust = markup.find(">Rust<").unwrap();
        let c = markup.find(">C Programming<").unwrap();
        assert!(rust < c);
    }
}
