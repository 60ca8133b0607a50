/// The three POS devices sold on the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DeviceId {
    #[default]
    Aspire,
    Pro2,
    Elite,
}

impl DeviceId {
    /// Display order on the device page selector.
    pub const ALL: [DeviceId; 3] = [DeviceId::Aspire, DeviceId::Pro2, DeviceId::Elite];

    /// Path segment used in `/device/<slug>` and as the anchor id of the
    /// showcase card.
    pub fn slug(self) -> &'static str {
        match self {
            DeviceId::Aspire => "aspire",
            DeviceId::Pro2 => "pro2",
            DeviceId::Elite => "elite",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.slug() == slug)
    }

    pub fn name(self) -> &'static str {
        match self {
            DeviceId::Aspire => "Aspire",
            DeviceId::Pro2 => "Pro2",
            DeviceId::Elite => "Elite-A",
        }
    }
}

/// Kind of a specification line; the UI picks an icon from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecKind {
    Display,
    Processor,
    Ram,
    Storage,
    Connectivity,
    Battery,
    Os,
    Ports,
}

impl SpecKind {
    pub fn label(self) -> &'static str {
        match self {
            SpecKind::Display => "Display",
            SpecKind::Processor => "Processor",
            SpecKind::Ram => "RAM",
            SpecKind::Storage => "Storage",
            SpecKind::Connectivity => "Connectivity",
            SpecKind::Battery => "Battery",
            SpecKind::Os => "OS",
            SpecKind::Ports => "Ports",
        }
    }
}

/// Headline spec shown on the home page showcase card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlineSpec {
    pub kind: SpecKind,
    pub value: &'static str,
}

/// Detailed configuration card on the device page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    pub kind: SpecKind,
    pub value: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub id: DeviceId,
    pub tagline: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub headline_specs: &'static [HeadlineSpec],
    pub configurations: &'static [Configuration],
}

impl Device {
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Path of the device page.
    pub fn href(&self) -> String {
        format!("/device/{}", self.id.slug())
    }
}
