/// Combined display name showing both company and product when they differ.
///
/// Whitespace is trimmed. When either name contains the other
/// (case-insensitive) only the company name is shown.
pub fn build_company_display_name(company_name: Option<&str>, product_name: Option<&str>) -> String {
    let company = company_name.unwrap_or_default().trim();
    let product = product_name.unwrap_or_default().trim();

    match (company.is_empty(), product.is_empty()) {
        (true, true) => return String::new(),
        (false, true) => return company.to_string(),
        (true, false) => return product.to_string(),
        (false, false) => {}
    }

    let normalized_company = company.to_lowercase();
    let normalized_product = product.to_lowercase();

    if normalized_company.contains(&normalized_product)
        || normalized_product.contains(&normalized_company)
    {
        return company.to_string();
    }

    format!("{company} — {product}")
}
