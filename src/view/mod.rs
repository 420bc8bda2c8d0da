pub mod dom;

pub use dom::{Element, Node};

use std::collections::BTreeMap;
use std::fmt;

/// Page sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Page {
    Dashboard,
    Allocation,
    Inventory,
    Map,
    Reports,
    Submit,
}

/// Side effects run when a page becomes active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEffect {
    FetchPendingRequests,
    FetchInventory,
    InitMap,
    InitCharts,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Allocation,
        Page::Inventory,
        Page::Map,
        Page::Reports,
        Page::Submit,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Allocation => "allocation",
            Page::Inventory => "inventory",
            Page::Map => "map",
            Page::Reports => "reports",
            Page::Submit => "submit",
        }
    }

    pub fn from_id(id: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.id() == id.trim())
    }

    pub fn effects(self) -> &'static [PageEffect] {
        use PageEffect::*;
        match self {
            Page::Dashboard => &[FetchPendingRequests, InitCharts],
            Page::Allocation => &[FetchPendingRequests],
            Page::Inventory => &[FetchInventory],
            Page::Map => &[InitMap],
            Page::Reports => &[InitCharts],
            Page::Submit => &[],
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Independently replaced parts of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    AllocationTable,
    UrgentList,
    UrgentBadge,
    InventoryTable,
}

impl Region {
    /// Selector of the container in the page shell.
    pub fn selector(self) -> &'static str {
        match self {
            Region::AllocationTable => "#allocation .inventory-table tbody",
            Region::UrgentList => "#urgent-requests-list",
            Region::UrgentBadge => "#urgent-badge",
            Region::InventoryTable => "#inventory .inventory-table tbody",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestForm {
    pub resource_type: String,
    pub quantity: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryForm {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub location: String,
}

/// Everything the page shows outside the map and chart widgets.
#[derive(Debug, Clone)]
pub struct ViewState {
    active: Page,
    regions: BTreeMap<Region, Vec<Node>>,
    pub request_form: RequestForm,
    pub inventory_form: InventoryForm,
}

impl ViewState {
    pub fn new(active: Page) -> Self {
        ViewState {
            active,
            regions: BTreeMap::new(),
            request_form: RequestForm::default(),
            inventory_form: InventoryForm::default(),
        }
    }

    pub fn active_page(&self) -> Page {
        self.active
    }

    /// Marks `page` as the only active link and section.
    pub fn activate(&mut self, page: Page) {
        self.active = page;
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.active == page
    }

    /// Replaces the whole content of a region.
    pub fn replace(&mut self, region: Region, nodes: Vec<Node>) {
        self.regions.insert(region, nodes);
    }

    pub fn region(&self, region: Region) -> &[Node] {
        self.regions.get(&region).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn region_html(&self, region: Region) -> String {
        dom::to_html(self.region(region))
    }

    pub fn region_text(&self, region: Region) -> String {
        self.region(region)
            .iter()
            .map(|node| match node {
                Node::Element(el) => el.text_content(),
                Node::Text(text) => text.clone(),
            })
            .collect()
    }

    /// Click path from the region root to the `index`th element with `class`.
    pub fn click_path(&self, region: Region, class: &str, index: usize) -> Option<Vec<Element>> {
        self.region(region)
            .iter()
            .filter_map(Node::as_element)
            .filter_map(|el| el.path_to_class(class))
            .nth(index)
    }

    /// (id, active) pairs for the navigation links.
    pub fn nav_links(&self) -> Vec<(&'static str, bool)> {
        Page::ALL
            .iter()
            .map(|p| (p.id(), *p == self.active))
            .collect()
    }
}
