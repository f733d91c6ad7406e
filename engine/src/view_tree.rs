use serde::{Deserialize, Serialize};

use crate::graphics::{Color, Renderer2d};
use crate::ui::Rect;

/// Ordered draw list for one frame. Nodes paint in push order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewTree {
    pub nodes: Vec<ViewNode>,
}

impl ViewTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn push(&mut self, node: ViewNode) {
        self.nodes.push(node);
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextNode> {
        self.nodes.iter().filter_map(|node| match node {
            ViewNode::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &CircleNode> {
        self.nodes.iter().filter_map(|node| match node {
            ViewNode::Circle(circle) => Some(circle),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewNode {
    Rect(RectNode),
    Circle(CircleNode),
    Text(TextNode),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectNode {
    pub rect: Rect,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleNode {
    pub center: (i32, i32),
    pub radius: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub pos: (u32, u32),
    pub text: String,
    pub color: Color,
    pub scale: u32,
}

pub fn draw_view(view: &ViewTree, gfx: &mut dyn Renderer2d) {
    for node in &view.nodes {
        match node {
            ViewNode::Rect(node) => gfx.fill_rect(node.rect, node.color),
            ViewNode::Circle(node) => {
                gfx.fill_circle(node.center.0, node.center.1, node.radius, node.color)
            }
            ViewNode::Text(node) => {
                gfx.draw_text_scaled(node.pos.0, node.pos.1, &node.text, node.color, node.scale)
            }
        }
    }
}
