//! Layered Compositor
//!
//! The screen is three stacked layers: the nav bar pinned to the top, the
//! status bar pinned to the bottom and the scrolling page between them.
//! Each layer renders into its own buffer; the compositor blits them back to
//! front into one output buffer and answers "which layer is under the
//! mouse".

mod layer;

use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

pub use layer::Layer;

/// Unique identifier for a layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(u32);

/// The compositor manages all layers and composites them together
pub struct Compositor {
    layers: HashMap<LayerId, Layer>,
    /// Back to front
    render_order: Vec<LayerId>,
    next_id: u32,
    output: Buffer,
    area: Rect,
}

impl Compositor {
    /// Create a new compositor for the given area
    pub fn new(area: Rect) -> Self {
        Self {
            layers: HashMap::new(),
            render_order: Vec::new(),
            next_id: 0,
            output: Buffer::empty(area),
            area,
        }
    }

    /// Total area
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Create a new layer and return its ID
    pub fn create_layer(&mut self, bounds: Rect, z_index: i32) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;

        self.layers.insert(id, Layer::new(id, bounds, z_index));
        self.update_render_order();

        id
    }

    /// Get a layer
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(&id)
    }

    /// Get mutable access to a layer's buffer for rendering
    pub fn layer_buffer_mut(&mut self, id: LayerId) -> Option<&mut Buffer> {
        self.layers.get_mut(&id).map(|l| &mut l.buffer)
    }

    /// Move and resize a layer, clearing its buffer
    pub fn set_bounds(&mut self, id: LayerId, bounds: Rect) {
        if let Some(layer) = self.layers.get_mut(&id) {
            if layer.bounds != bounds {
                layer.bounds = bounds;
                layer.buffer = Buffer::empty(Rect::new(0, 0, bounds.width, bounds.height));
            }
        }
    }

    /// Set layer visibility
    pub fn set_visible(&mut self, id: LayerId, visible: bool) {
        if let Some(layer) = self.layers.get_mut(&id) {
            layer.visible = visible;
        }
    }

    /// Resize the entire compositor
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.output = Buffer::empty(area);
    }

    /// Composite all visible layers into the output buffer
    pub fn composite(&mut self) -> &Buffer {
        self.output.reset();

        for id in &self.render_order {
            if let Some(layer) = self.layers.get(id) {
                if layer.visible {
                    Self::blit_layer(&mut self.output, self.area, layer);
                }
            }
        }

        &self.output
    }

    /// Blit a layer onto the output buffer
    ///
    /// Untouched cells (blank symbol, no background) are holes that let
    /// lower layers show through.
    fn blit_layer(output: &mut Buffer, area: Rect, layer: &Layer) {
        let lb = layer.bounds;

        for ly in 0..lb.height {
            for lx in 0..lb.width {
                let dst_x = lb.x + lx;
                let dst_y = lb.y + ly;
                if dst_x >= area.width || dst_y >= area.height {
                    continue;
                }

                let Some(src) = layer.buffer.cell((lx, ly)) else {
                    continue;
                };
                if src.symbol() == " " && src.bg == Color::Reset {
                    continue;
                }
                if let Some(dst) = output.cell_mut((dst_x, dst_y)) {
                    *dst = src.clone();
                }
            }
        }
    }

    /// Find the topmost visible layer at a screen position (for mouse events)
    pub fn layer_at(&self, x: u16, y: u16) -> Option<LayerId> {
        self.render_order
            .iter()
            .rev()
            .copied()
            .find(|id| {
                self.layers
                    .get(id)
                    .is_some_and(|layer| layer.visible && layer.contains(x, y))
            })
    }

    fn update_render_order(&mut self) {
        self.render_order = self.layers.keys().copied().collect();
        self.render_order
            .sort_by_key(|id| (self.layers.get(id).map_or(0, |l| l.z_index), id.0));
    }
}
