//! Console output formatter for catalog views

use crate::output::currency::{area_label, bedrooms_label, price_label};
use colored::Colorize;
use silfira_application::{BrowseOutput, PropertyView};
use silfira_domain::{Agent, Property};

/// Formats catalog views for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the browse view: count bar plus one card per record.
    ///
    /// `quiet` drops the count bar; the "no matches" message stays, since it
    /// is the result rather than decoration.
    pub fn format_browse(output: &BrowseOutput, quiet: bool) -> String {
        if output.is_empty() {
            return Self::empty_result();
        }

        let mut text = String::new();
        if !quiet {
            text.push_str(&format!(
                "Showing {} {}\n",
                output.count().to_string().bold(),
                if output.count() == 1 { "property" } else { "properties" }
            ));
        }
        for property in output.properties() {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&Self::card(property));
        }
        text
    }

    /// Format the featured highlight set.
    pub fn format_featured(properties: &[&Property], quiet: bool) -> String {
        if properties.is_empty() {
            return "No featured properties.\n".to_string();
        }

        let mut text = String::new();
        if !quiet {
            text.push_str(&format!("{}\n", "Featured Properties".cyan().bold()));
        }
        for property in properties {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&Self::card(property));
        }
        text
    }

    /// Format the detail view, agent panel included when it resolves.
    pub fn format_detail(view: &PropertyView) -> String {
        let PropertyView::Found { property, agent } = view else {
            return Self::not_found();
        };

        let mut text = Self::card(property);
        if !property.description.is_empty() {
            text.push_str(&format!("  {}\n", property.description));
        }
        if !property.features.is_empty() {
            text.push_str(&format!(
                "  {} {}\n",
                "Features:".cyan(),
                property.features.join(", ")
            ));
        }

        if let Some(agent) = agent {
            text.push('\n');
            text.push_str(&Self::agent_panel(agent));
        }
        text
    }

    /// Format the agent directory.
    pub fn format_agents(agents: &[Agent], quiet: bool) -> String {
        if agents.is_empty() {
            return "No agents in the directory.\n".to_string();
        }

        let mut text = String::new();
        if !quiet {
            text.push_str(&format!("{}\n", "Our Agents".cyan().bold()));
        }
        for agent in agents {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&Self::agent_panel(agent));
        }
        text
    }

    /// JSON form of a browse or featured selection.
    pub fn format_listings_json(properties: &[&Property]) -> String {
        serde_json::to_string_pretty(properties).unwrap_or_else(|_| "[]".to_string())
    }

    /// JSON form of the detail view.
    pub fn format_detail_json(view: &PropertyView) -> String {
        let value = match view {
            PropertyView::Found { property, agent } => serde_json::json!({
                "found": true,
                "property": property,
                "agent": agent,
            }),
            PropertyView::NotFound => serde_json::json!({ "found": false }),
        };
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// JSON form of the agent directory.
    pub fn format_agents_json(agents: &[Agent]) -> String {
        serde_json::to_string_pretty(agents).unwrap_or_else(|_| "[]".to_string())
    }

    fn card(property: &Property) -> String {
        let mut header = property.title.bold().to_string();
        if property.featured {
            header.push_str(&format!(" {}", "[Featured]".blue()));
        }
        header.push_str(&format!("  ({})", property.status.label().yellow()));

        let mut text = format!("{}\n", header);
        text.push_str(&format!("  {}\n", property.location));
        text.push_str(&format!(
            "  {} | {} Bath | {}\n",
            bedrooms_label(&property.bedrooms),
            property.bathrooms,
            area_label(&property.area),
        ));
        text.push_str(&format!(
            "  {}\n",
            price_label(&property.price, property.status).green().bold()
        ));
        if !property.brochure.is_empty() {
            text.push_str(&format!("  {} {}\n", "Brochure:".cyan(), property.brochure));
        }
        text
    }

    fn agent_panel(agent: &Agent) -> String {
        let mut text = format!("{} ({})\n", agent.name.bold(), agent.title);
        text.push_str(&format!("  {} | {}\n", agent.email, agent.phone));
        if !agent.specialties.is_empty() {
            text.push_str(&format!(
                "  {} {}\n",
                "Specialties:".cyan(),
                agent.specialties.join(", ")
            ));
        }
        if agent.listings > 0 {
            text.push_str(&format!("  {} listings\n", agent.listings));
        }
        text
    }

    fn empty_result() -> String {
        format!(
            "{}\n{}\n",
            "No properties found matching your criteria".yellow(),
            "Clear the filters to see the full catalog: silfira browse".dimmed()
        )
    }

    fn not_found() -> String {
        format!(
            "{}\n{}\n",
            "Property not found".yellow(),
            "Back to browsing: silfira browse".dimmed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silfira_application::{BrowseListingsUseCase, ViewPropertyUseCase};
    use silfira_domain::{
        AgentDirectory, AgentId, Catalog, Figure, FilterCriteria, PropertyId, PropertyStatus,
    };
    use std::sync::Arc;

    fn atmos() -> Property {
        Property {
            id: PropertyId::new("2"),
            title: "Atmos By Solaire".to_string(),
            kind: "Apartments".to_string(),
            status: PropertyStatus::ForSale,
            price: Figure::range(11_040_000, 14_160_000).unwrap(),
            bedrooms: Figure::range(3, 4).unwrap(),
            bathrooms: 4,
            area: Figure::range(2484, 3186).unwrap(),
            location: "Sargasan, Gandhinagar".to_string(),
            images: vec!["cover.png".to_string()],
            description: "Luxurious penthouse.".to_string(),
            features: vec!["Gym".to_string(), "Parking".to_string()],
            agent_id: AgentId::new("agent2"),
            featured: true,
            brochure: "/brochures/AS.pdf".to_string(),
        }
    }

    fn agent() -> Agent {
        Agent {
            id: AgentId::new("agent2"),
            name: "Amit Desai".to_string(),
            title: "Co-Founder".to_string(),
            photo: String::new(),
            email: "listings@silfira.example".to_string(),
            phone: "+91 6353458552".to_string(),
            bio: String::new(),
            specialties: vec!["Residential Sales".to_string()],
            listings: 45,
        }
    }

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::new(vec![atmos()], AgentDirectory::new(vec![agent()])).unwrap())
    }

    #[test]
    fn test_browse_shows_count_and_decorated_figures() {
        colored::control::set_override(false);
        let use_case = BrowseListingsUseCase::new(catalog());
        let output = use_case.execute(&FilterCriteria::default());
        let text = ConsoleFormatter::format_browse(&output, false);

        assert!(text.contains("Showing 1 property"));
        assert!(text.contains("Atmos By Solaire"));
        assert!(text.contains("3-4 BHK"));
        assert!(text.contains("2,484-3,186 sqft"));
        assert!(text.contains("₹1,10,40,000 - ₹1,41,60,000"));
        assert!(text.contains("[Featured]"));
    }

    #[test]
    fn test_empty_browse_offers_reset_hint() {
        colored::control::set_override(false);
        let use_case = BrowseListingsUseCase::new(catalog());
        let output =
            use_case.execute(&FilterCriteria::default().with_price_bounds(15_000_000, 20_000_000));
        let text = ConsoleFormatter::format_browse(&output, false);

        assert!(text.contains("No properties found"));
        assert!(text.contains("silfira browse"));
    }

    #[test]
    fn test_quiet_suppresses_headers_but_keeps_cards() {
        colored::control::set_override(false);
        let use_case = BrowseListingsUseCase::new(catalog());
        let output = use_case.execute(&FilterCriteria::default());

        let text = ConsoleFormatter::format_browse(&output, true);
        assert!(!text.contains("Showing"));
        assert!(text.contains("Atmos By Solaire"));

        let featured: Vec<&Property> = output.properties().to_vec();
        let text = ConsoleFormatter::format_featured(&featured, true);
        assert!(!text.contains("Featured Properties"));
        assert!(text.contains("Atmos By Solaire"));

        let text = ConsoleFormatter::format_agents(&[agent()], true);
        assert!(!text.contains("Our Agents"));
        assert!(text.contains("Amit Desai"));
    }

    #[test]
    fn test_quiet_keeps_empty_result_message() {
        colored::control::set_override(false);
        let use_case = BrowseListingsUseCase::new(catalog());
        let output =
            use_case.execute(&FilterCriteria::default().with_price_bounds(15_000_000, 20_000_000));

        let text = ConsoleFormatter::format_browse(&output, true);
        assert!(text.contains("No properties found"));
    }

    #[test]
    fn test_detail_joins_agent_panel() {
        colored::control::set_override(false);
        let use_case = ViewPropertyUseCase::new(catalog());
        let view = use_case.execute(&PropertyId::new("2"));
        let text = ConsoleFormatter::format_detail(&view);

        assert!(text.contains("Luxurious penthouse."));
        assert!(text.contains("Gym, Parking"));
        assert!(text.contains("Amit Desai"));
        assert!(text.contains("45 listings"));
    }

    #[test]
    fn test_detail_not_found() {
        colored::control::set_override(false);
        let use_case = ViewPropertyUseCase::new(catalog());
        let view = use_case.execute(&PropertyId::new("missing-id"));
        let text = ConsoleFormatter::format_detail(&view);

        assert!(text.contains("Property not found"));
    }

    #[test]
    fn test_json_detail_round_trips() {
        let use_case = ViewPropertyUseCase::new(catalog());
        let view = use_case.execute(&PropertyId::new("2"));
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_detail_json(&view)).unwrap();

        assert_eq!(value["found"], true);
        assert_eq!(value["property"]["id"], "2");
        assert_eq!(value["property"]["price"]["min"], 11_040_000);
        assert_eq!(value["agent"]["name"], "Amit Desai");

        let missing = use_case.execute(&PropertyId::new("7"));
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_detail_json(&missing)).unwrap();
        assert_eq!(value["found"], false);
    }
}
