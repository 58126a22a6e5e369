//! Markdown for assistant replies.
//!
//! `parse_markdown` flattens pulldown-cmark events into a small block list that
//! egui can lay out without a widget tree; `render_blocks` draws it and reports
//! the link the user clicked, if any. GitHub extensions (tables, strikethrough,
//! task lists) are enabled; nested emphasis collapses to flags, and images and
//! raw HTML degrade to plain text.

use egui::{RichText, Ui};
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use nutri_types::message::{Message, MessageKind, Sender};

use crate::theme::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Span {
    Text { text: String, strong: bool, emphasis: bool, strike: bool },
    Code(String),
    Link { text: String, url: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum MdBlock {
    Heading { level: u8, spans: Vec<Span> },
    Paragraph(Vec<Span>),
    /// `marker` is "•" for bullets or "N." for ordered items; `depth` starts at 1
    ListItem { depth: usize, marker: String, spans: Vec<Span> },
    CodeBlock { lang: Option<String>, code: String },
    /// Cells are span runs; rows may be shorter than the header
    Table { header: Vec<Vec<Span>>, rows: Vec<Vec<Vec<Span>>> },
    Rule,
}

/// How a transcript entry is drawn: user text verbatim, assistant text as markdown
#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    Plain(String),
    Markdown(Vec<MdBlock>),
}

impl MessageBody {
    pub fn for_message(message: &Message) -> Self {
        match (message.sender, message.kind) {
            (Sender::User, _) | (_, MessageKind::Error) => MessageBody::Plain(message.text.clone()),
            (Sender::Assistant, _) => MessageBody::Markdown(parse_markdown(&message.text)),
        }
    }
}

#[derive(Default)]
struct TableBuilder {
    header: Vec<Vec<Span>>,
    rows: Vec<Vec<Vec<Span>>>,
    row: Vec<Vec<Span>>,
}

#[derive(Default)]
struct Builder {
    blocks: Vec<MdBlock>,
    spans: Vec<Span>,
    strong: usize,
    emphasis: usize,
    strike: usize,
    /// Destination and accumulated text of the link being read
    link: Option<(String, String)>,
    /// Language and body of the fenced or indented block being read
    code: Option<(Option<String>, String)>,
    /// One entry per open list; `Some(n)` is the next ordinal of an ordered list
    lists: Vec<Option<u64>>,
    /// Marker for the current item until its first line is flushed
    item_marker: Option<String>,
    table: Option<TableBuilder>,
}

impl Builder {
    fn push_text(&mut self, text: &str) {
        if let Some((_, code)) = self.code.as_mut() {
            code.push_str(text);
            return;
        }
        if let Some((_, label)) = self.link.as_mut() {
            label.push_str(text);
            return;
        }
        let strong = self.strong > 0;
        let emphasis = self.emphasis > 0;
        let strike = self.strike > 0;
        if let Some(Span::Text { text: last, strong: s, emphasis: e, strike: k }) = self.spans.last_mut() {
            if (*s, *e, *k) == (strong, emphasis, strike) {
                last.push_str(text);
                return;
            }
        }
        self.spans.push(Span::Text { text: text.to_string(), strong, emphasis, strike });
    }

    /// Close the current run of inline spans as a paragraph or list item line
    fn flush(&mut self) {
        if self.spans.is_empty() {
            return;
        }
        let spans = std::mem::take(&mut self.spans);
        match self.item_marker.take() {
            Some(marker) => self.blocks.push(MdBlock::ListItem {
                depth: self.lists.len().max(1),
                marker,
                spans,
            }),
            None => self.blocks.push(MdBlock::Paragraph(spans)),
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => match self.link.as_mut() {
                Some((_, label)) => label.push_str(&code),
                None => self.spans.push(Span::Code(code.to_string())),
            },
            Event::SoftBreak => self.push_text(" "),
            Event::HardBreak => self.push_text("\n"),
            Event::Rule => {
                self.flush();
                self.blocks.push(MdBlock::Rule);
            }
            Event::Html(html) | Event::InlineHtml(html) => self.push_text(&html),
            Event::TaskListMarker(done) => self.push_text(if done { "[x] " } else { "[ ] " }),
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph | Tag::Heading { .. } => self.flush(),
            Tag::CodeBlock(kind) => {
                self.flush();
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_string),
                    CodeBlockKind::Indented => None,
                };
                self.code = Some((lang, String::new()));
            }
            Tag::List(first) => {
                self.flush();
                self.lists.push(first);
            }
            Tag::Item => {
                self.flush();
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}.", n);
                        *n += 1;
                        marker
                    }
                    _ => "•".to_string(),
                };
                self.item_marker = Some(marker);
            }
            Tag::Table(_) => {
                self.flush();
                self.table = Some(TableBuilder::default());
            }
            Tag::Strong => self.strong += 1,
            Tag::Emphasis => self.emphasis += 1,
            Tag::Strikethrough => self.strike += 1,
            Tag::Link { dest_url, .. } => self.link = Some((dest_url.to_string(), String::new())),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.flush(),
            TagEnd::Item => {
                self.flush();
                // Items holding only a code block or heading never consume it
                self.item_marker = None;
            }
            TagEnd::Heading(level) => {
                let spans = std::mem::take(&mut self.spans);
                self.blocks.push(MdBlock::Heading { level: level as u8, spans });
            }
            TagEnd::CodeBlock => {
                if let Some((lang, mut code)) = self.code.take() {
                    if code.ends_with('\n') {
                        code.pop();
                    }
                    self.blocks.push(MdBlock::CodeBlock { lang, code });
                }
            }
            TagEnd::List(_) => {
                self.flush();
                self.item_marker = None;
                self.lists.pop();
            }
            TagEnd::TableCell => {
                let cell = std::mem::take(&mut self.spans);
                if let Some(table) = self.table.as_mut() {
                    table.row.push(cell);
                }
            }
            TagEnd::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.header = std::mem::take(&mut table.row);
                }
            }
            TagEnd::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    let row = std::mem::take(&mut table.row);
                    table.rows.push(row);
                }
            }
            TagEnd::Table => {
                if let Some(table) = self.table.take() {
                    self.blocks.push(MdBlock::Table {
                        header: table.header,
                        rows: table.rows,
                    });
                }
            }
            TagEnd::Strong => self.strong = self.strong.saturating_sub(1),
            TagEnd::Emphasis => self.emphasis = self.emphasis.saturating_sub(1),
            TagEnd::Strikethrough => self.strike = self.strike.saturating_sub(1),
            TagEnd::Link => {
                if let Some((url, text)) = self.link.take() {
                    let text = if text.is_empty() { url.clone() } else { text };
                    self.spans.push(Span::Link { text, url });
                }
            }
            _ => {}
        }
    }
}

pub fn parse_markdown(source: &str) -> Vec<MdBlock> {
    let mut builder = Builder::default();
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    for event in Parser::new_ext(source, options) {
        builder.handle(event);
    }
    builder.flush();
    builder.blocks
}

/// Concatenated visible text of a span run
pub fn plain_text(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Text { text, .. } | Span::Code(text) | Span::Link { text, .. } => text.as_str(),
        })
        .collect()
}

// ─── Rendering ───────────────────────────────────────────

/// Draw the blocks. Returns the URL of a link clicked this frame.
pub fn render_blocks(ui: &mut Ui, blocks: &[MdBlock]) -> Option<String> {
    let mut clicked = None;

    for block in blocks {
        match block {
            MdBlock::Heading { level, spans } => {
                let size = match level {
                    1 => 22.0,
                    2 => 19.0,
                    _ => 16.0,
                };
                ui.add_space(4.0);
                ui.label(RichText::new(plain_text(spans)).size(size).strong().color(ACCENT));
            }
            MdBlock::Paragraph(spans) => {
                if let Some(url) = render_spans(ui, spans) {
                    clicked = Some(url);
                }
            }
            MdBlock::ListItem { depth, marker, spans } => {
                ui.horizontal_wrapped(|ui| {
                    ui.add_space(12.0 * *depth as f32);
                    ui.label(RichText::new(marker).color(ACCENT));
                    if let Some(url) = inline_spans(ui, spans) {
                        clicked = Some(url);
                    }
                });
            }
            MdBlock::CodeBlock { code, .. } => {
                egui::Frame::default()
                    .fill(CODE_BG)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        egui::ScrollArea::horizontal().show(ui, |ui| {
                            ui.label(RichText::new(code).monospace().color(TEXT_PRIMARY));
                        });
                    });
            }
            MdBlock::Table { header, rows } => {
                if let Some(url) = render_table(ui, header, rows) {
                    clicked = Some(url);
                }
            }
            MdBlock::Rule => {
                ui.separator();
            }
        }
    }

    clicked
}

fn render_table(ui: &mut Ui, header: &[Vec<Span>], rows: &[Vec<Vec<Span>>]) -> Option<String> {
    let mut clicked = None;
    egui::Frame::default()
        .fill(BG_SURFACE)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(6.0)
        .show(ui, |ui| {
            egui::Grid::new(ui.next_auto_id())
                .striped(true)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for cell in header {
                        ui.label(RichText::new(plain_text(cell)).strong().color(ACCENT));
                    }
                    ui.end_row();
                    for row in rows {
                        for cell in row {
                            if let Some(url) = ui.horizontal(|ui| inline_spans(ui, cell)).inner {
                                clicked = Some(url);
                            }
                        }
                        ui.end_row();
                    }
                });
        });
    clicked
}

fn render_spans(ui: &mut Ui, spans: &[Span]) -> Option<String> {
    ui.horizontal_wrapped(|ui| inline_spans(ui, spans)).inner
}

fn inline_spans(ui: &mut Ui, spans: &[Span]) -> Option<String> {
    ui.spacing_mut().item_spacing.x = 0.0;
    let mut clicked = None;
    for span in spans {
        match span {
            Span::Text { text, strong, emphasis, strike } => {
                let mut rich = RichText::new(text).color(TEXT_PRIMARY);
                if *strong {
                    rich = rich.strong();
                }
                if *emphasis {
                    rich = rich.italics();
                }
                if *strike {
                    rich = rich.strikethrough();
                }
                ui.label(rich);
            }
            Span::Code(code) => {
                ui.label(RichText::new(code).code().color(CODE_FG).background_color(CODE_BG));
            }
            Span::Link { text, url } => {
                let response = ui.link(RichText::new(text).color(LINK).underline());
                if response.on_hover_text(url).clicked() {
                    clicked = Some(url.clone());
                }
            }
        }
    }
    clicked
}
