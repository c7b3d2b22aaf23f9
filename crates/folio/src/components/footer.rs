use maud::{html, Markup};

pub fn footer(owner: &str, year: u16) -> Markup {
    html! {
        footer class="bg-[#0D324D] text-white text-center py-6" {
            p { "© " (year) " " (owner) "." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        let markup = footer("Ada Lovelace", 2024).into_string();
        assert!(markup.contains("<p>© 2024 Ada Lovelace.</p>"));
    }
}
