//! Pointer gestures routed to the active tool

use cellart_engine::Position;

use crate::brushes::BrushMode;
use crate::tools::{Modifiers, Tool};

use super::EditState;

impl EditState {
    /// Switches tools. A staged move is committed and any gesture in progress ends.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool == self.tool {
            return;
        }
        self.commit_move();
        self.end_typing();
        self.finish_stroke();
        self.shape = None;
        self.gradient_session = None;
        self.selection.cancel_freeform();
        log::debug!("tool: {} -> {}", self.tool.name(), tool.name());
        self.tool = tool;
    }

    /// Selecting the active tool again switches to its toggle partner.
    pub fn select_tool(&mut self, tool: Tool) {
        if tool == self.tool {
            self.set_tool(tool.toggle_partner());
        } else {
            self.set_tool(tool);
        }
    }

    pub fn pointer_down(&mut self, pos: impl Into<Position>, modifiers: Modifiers) {
        let pos = pos.into();
        match self.tool {
            Tool::Select | Tool::Lasso | Tool::MagicWand => {
                if self.selection.contains(pos) {
                    self.begin_move_drag(pos);
                    return;
                }
                // clicking outside auto commits a staged move
                self.commit_move();
                match self.tool {
                    Tool::Select => self.selection.begin_rectangle(pos),
                    Tool::Lasso => self.selection.begin_freeform(pos),
                    _ => self.select_matching(pos),
                }
            }
            Tool::Pencil => self.begin_stroke(pos, BrushMode::Draw),
            Tool::Eraser => self.begin_stroke(pos, BrushMode::Erase),
            Tool::Line | Tool::RectangleOutline | Tool::RectangleFilled | Tool::EllipseOutline | Tool::EllipseFilled => {
                self.begin_shape(self.tool, pos);
            }
            Tool::Fill => {
                self.fill_at(pos);
            }
            Tool::Gradient => {
                if modifiers.contains(Modifiers::ALT) && self.gradient_session.is_some() {
                    self.set_gradient_control(Some(pos));
                } else {
                    self.begin_gradient(pos);
                }
            }
            Tool::Eyedropper => {
                self.pick_cell(pos);
            }
            Tool::Text => self.begin_typing(pos),
        }
    }

    pub fn pointer_move(&mut self, pos: impl Into<Position>, modifiers: Modifiers) {
        let pos = pos.into();
        match self.tool {
            Tool::Select | Tool::Lasso | Tool::MagicWand => {
                if self.selection.is_dragging() {
                    self.update_move_drag(pos);
                } else if self.tool == Tool::Select {
                    self.selection.update_rectangle(pos, modifiers.shift());
                } else if self.tool == Tool::Lasso {
                    self.selection.extend_freeform(pos);
                }
            }
            Tool::Pencil | Tool::Eraser => self.continue_stroke(pos),
            Tool::Line | Tool::RectangleOutline | Tool::RectangleFilled | Tool::EllipseOutline | Tool::EllipseFilled => {
                self.update_shape(pos, modifiers.shift());
            }
            Tool::Gradient => {
                let dragging = self.gradient_session.as_ref().is_some_and(|s| s.dragging);
                if modifiers.contains(Modifiers::ALT) {
                    self.set_gradient_control(Some(pos));
                } else if dragging {
                    self.update_gradient_end(pos);
                }
            }
            Tool::Fill | Tool::Eyedropper | Tool::Text => {}
        }
    }

    pub fn pointer_up(&mut self, pos: impl Into<Position>, modifiers: Modifiers) {
        let pos = pos.into();
        match self.tool {
            Tool::Select | Tool::Lasso | Tool::MagicWand => {
                if self.selection.is_dragging() {
                    self.update_move_drag(pos);
                    self.end_move_drag();
                } else if self.tool == Tool::Select {
                    self.selection.update_rectangle(pos, modifiers.shift());
                    self.selection.finish_rectangle();
                } else if self.tool == Tool::Lasso {
                    self.selection.extend_freeform(pos);
                    let smoothing = self.settings.final_smoothing;
                    self.selection.finish_freeform(&self.grid, smoothing);
                }
            }
            Tool::Pencil | Tool::Eraser => {
                self.continue_stroke(pos);
                self.finish_stroke();
            }
            Tool::Line | Tool::RectangleOutline | Tool::RectangleFilled | Tool::EllipseOutline | Tool::EllipseFilled => {
                self.update_shape(pos, modifiers.shift());
                self.finish_shape();
            }
            Tool::Gradient => {
                if !modifiers.contains(Modifiers::ALT) && self.gradient_session.as_ref().is_some_and(|s| s.dragging) {
                    self.update_gradient_end(pos);
                }
                self.end_gradient_drag();
            }
            Tool::Fill | Tool::Eyedropper | Tool::Text => {}
        }
    }

    /// Live lasso outline while drawing.
    pub fn freeform_preview(&self) -> Option<Vec<crate::selection::PathPoint>> {
        self.selection.freeform_preview(self.settings.preview_smoothing)
    }
}
