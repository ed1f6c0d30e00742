//! Rupee and unit decoration
//!
//! The domain renders figures undecorated ("11040000-14160000"); these
//! helpers add the locale layer the catalog views use: Indian digit
//! grouping (lakh/crore), the rupee sign, BHK and sqft suffixes, and the
//! "/mo" suffix for rentals.

use silfira_domain::{Area, Bedrooms, Figure, Price, PropertyStatus};

/// Group digits Indian-style: last three, then pairs.
///
/// `11040000` becomes `1,10,40,000`.
pub fn format_inr(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = vec![tail.to_string()];
    while head.len() > 2 {
        let (rest, pair) = head.split_at(head.len() - 2);
        groups.push(pair.to_string());
        head = rest;
    }
    groups.push(head.to_string());
    groups.reverse();
    groups.join(",")
}

/// Decorate a single amount with the rupee sign: `₹1,10,40,000`.
pub fn rupees(value: u64) -> String {
    format!("\u{20b9}{}", format_inr(value))
}

/// Decorate a quoted price, both ends for a range, `/mo` for rentals.
pub fn price_label(price: &Price, status: PropertyStatus) -> String {
    let amount = match *price {
        Figure::Point(value) => rupees(value),
        Figure::Range { min, max } => format!("{} - {}", rupees(min), rupees(max)),
    };
    match status {
        PropertyStatus::ForSale => amount,
        PropertyStatus::ForRent => format!("{}/mo", amount),
    }
}

/// Decorate a bedroom figure: `3 BHK` or `3-4 BHK`.
pub fn bedrooms_label(bedrooms: &Bedrooms) -> String {
    format!("{} BHK", bedrooms)
}

/// Decorate an area figure with grouping: `2,295 sqft` or `2,484-3,186 sqft`.
pub fn area_label(area: &Area) -> String {
    match *area {
        Figure::Point(value) => format!("{} sqft", format_inr(u64::from(value))),
        Figure::Range { min, max } => format!(
            "{}-{} sqft",
            format_inr(u64::from(min)),
            format_inr(u64::from(max))
        ),
    }
}
