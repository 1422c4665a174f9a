//! Directory page URL construction.

use roster_core::FreeCompanyId;

/// Build the URL of one member directory page.
///
/// The Lodestone lists free company members at
/// `<base>/<fc_id>/member/?page=<n>`, with pages numbered from 1.
#[must_use]
pub fn member_page_url(base_url: &str, fc_id: &FreeCompanyId, page: u32) -> String {
    format!(
        "{}/{}/member/?page={}",
        base_url.trim_end_matches('/'),
        fc_id,
        page
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_page_url() {
        let fc_id = FreeCompanyId::new("9228157111459014466").expect("valid id");
        let url = member_page_url(
            "https://na.finalfantasyxiv.com/lodestone/freecompany",
            &fc_id,
            1,
        );
        assert_eq!(
            url,
            "https://na.finalfantasyxiv.com/lodestone/freecompany/9228157111459014466/member/?page=1"
        );
    }

    #[test]
    fn test_member_page_url_trims_trailing_slash() {
        let fc_id = FreeCompanyId::new("123").expect("valid id");
        let url = member_page_url("https://example.com/directory/", &fc_id, 7);
        assert_eq!(url, "https://example.com/directory/123/member/?page=7");
    }
}
