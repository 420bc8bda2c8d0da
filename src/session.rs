//! Map and chart widget lifecycle.
//!
//! The map and chart libraries sit behind `WidgetHost`. `ViewSession` owns the
//! only handles to mounted widgets: at most one map and one chart per canvas.
//! Every rebuild unmounts the previous widget first.

use std::collections::BTreeMap;

use crate::charts::{Canvas, ChartSpec};
use crate::geo::{Bounds, LatLng};
use crate::view::Element;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const MAP_CONTAINER: &str = "resource-map";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub request_id: i64,
    pub position: LatLng,
    pub popup: Element,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
    pub tile_url: &'static str,
    pub markers: Vec<Marker>,
    /// Fitted viewport; `None` keeps centre and zoom.
    pub viewport: Option<Bounds>,
    /// Request whose marker should be brought forward.
    pub focus: Option<i64>,
}

impl MapView {
    pub fn new(center: LatLng, zoom: u8) -> Self {
        MapView {
            center,
            zoom,
            tile_url: TILE_URL,
            markers: Vec::new(),
            viewport: None,
            focus: None,
        }
    }
}

/// Rendering backend for maps and charts.
pub trait WidgetHost {
    fn mount_map(&mut self, container: &str, view: &MapView) -> WidgetId;

    fn mount_chart(&mut self, spec: &ChartSpec) -> WidgetId;

    fn unmount(&mut self, id: WidgetId);
}

#[derive(Debug, Default)]
pub struct ViewSession {
    map: Option<WidgetId>,
    charts: BTreeMap<Canvas, WidgetId>,
}

impl ViewSession {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn map(&self) -> Option<WidgetId> {
        self.map
    }

    #[cfg(test)]
    pub fn chart(&self, canvas: Canvas) -> Option<WidgetId> {
        self.charts.get(&canvas).copied()
    }

    pub fn teardown_map<H: WidgetHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(id) = self.map.take() {
            host.unmount(id);
        }
    }

    pub fn replace_map<H: WidgetHost + ?Sized>(&mut self, host: &mut H, view: &MapView) -> WidgetId {
        self.teardown_map(host);
        let id = host.mount_map(MAP_CONTAINER, view);
        self.map = Some(id);
        id
    }

    pub fn replace_chart<H: WidgetHost + ?Sized>(
        &mut self,
        host: &mut H,
        spec: &ChartSpec,
    ) -> WidgetId {
        if let Some(old) = self.charts.remove(&spec.canvas) {
            host.unmount(old);
        }
        let id = host.mount_chart(spec);
        self.charts.insert(spec.canvas, id);
        id
    }

    pub fn teardown_charts<H: WidgetHost + ?Sized>(&mut self, host: &mut H) {
        for (_, id) in std::mem::take(&mut self.charts) {
            host.unmount(id);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Map(MapView),
    Chart(ChartSpec),
}

/// `WidgetHost` that keeps mounted widgets in memory.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    next_id: u64,
    live: BTreeMap<WidgetId, Widget>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live(&self) -> impl Iterator<Item = (&WidgetId, &Widget)> {
        self.live.iter()
    }

    pub fn live_maps(&self) -> Vec<&MapView> {
        self.live
            .values()
            .filter_map(|w| match w {
                Widget::Map(view) => Some(view),
                Widget::Chart(_) => None,
            })
            .collect()
    }

    pub fn live_charts(&self, canvas: Canvas) -> Vec<&ChartSpec> {
        self.live
            .values()
            .filter_map(|w| match w {
                Widget::Chart(spec) if spec.canvas == canvas => Some(spec),
                _ => None,
            })
            .collect()
    }

    fn insert(&mut self, widget: Widget) -> WidgetId {
        self.next_id += 1;
        let id = WidgetId(self.next_id);
        self.live.insert(id, widget);
        id
    }
}

impl WidgetHost for HeadlessHost {
    fn mount_map(&mut self, container: &str, view: &MapView) -> WidgetId {
        let id = self.insert(Widget::Map(view.clone()));
        tracing::debug!(
            "Mounted map #{} in #{} with {} markers",
            id.0,
            container,
            view.markers.len()
        );
        id
    }

    fn mount_chart(&mut self, spec: &ChartSpec) -> WidgetId {
        let id = self.insert(Widget::Chart(spec.clone()));
        tracing::debug!("Mounted chart #{} on #{}", id.0, spec.canvas.element_id());
        id
    }

    fn unmount(&mut self, id: WidgetId) {
        if self.live.remove(&id).is_none() {
            tracing::warn!("Unmount of unknown widget #{}", id.0);
        }
    }
}
