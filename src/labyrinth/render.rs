/*!
 * # Port de rendu
 *
 * Le générateur et le solveur ne dessinent jamais eux-mêmes : ils passent
 * par un `RenderPort`, dont la seule primitive est le tracé d'un segment.
 * Sans port attaché (mode headless, tests), tous les appels sont ignorés
 * et aucune pause n'est faite.
 */

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::labyrinth::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }
}

/// Style d'un segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stroke {
    /// Mur présent.
    Wall,
    /// Mur ouvert : on repasse dessus avec la couleur du fond.
    Erase,
    /// Déplacement en avant du solveur.
    Path,
    /// Retour arrière du solveur.
    Backtrack,
}

impl Stroke {
    /// Couleur dans la palette par défaut (fond noir).
    pub fn color(self) -> &'static str {
        match self {
            Stroke::Wall => "white",
            Stroke::Erase => "black",
            Stroke::Path => "red",
            Stroke::Backtrack => "gray",
        }
    }
}

/// Un appel reçu par un port de rendu.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RenderEvent {
    Line { line: Line, stroke: Stroke },
    Refresh,
}

/// Surface de dessin utilisée par le générateur et le solveur.
///
/// Une implémentation fournit `draw_line` et `refresh` ; le dessin des
/// cellules et des déplacements est construit par-dessus.
pub trait RenderPort {
    fn draw_line(&mut self, line: Line, stroke: Stroke);

    /// Vide les tracés en attente et traite une fois les événements UI.
    fn refresh(&mut self);

    /// Dessine les quatre murs de la cellule. Un mur absent est effacé,
    /// pas simplement omis.
    fn draw_cell(&mut self, cell: &Cell) {
        for (line, present) in cell.wall_segments() {
            let stroke = if present { Stroke::Wall } else { Stroke::Erase };
            self.draw_line(line, stroke);
        }
    }

    /// Trace un segment entre les centres des deux cellules.
    fn draw_move(&mut self, from: &Cell, to: &Cell, backtrack: bool) {
        let (Some(a), Some(b)) = (from.bounds, to.bounds) else {
            return;
        };
        let stroke = if backtrack { Stroke::Backtrack } else { Stroke::Path };
        self.draw_line(Line::new(a.center(), b.center()), stroke);
    }
}

/// Garde en mémoire tous les événements reçus.
///
/// Les clones partagent le même journal : on garde un clone pour relire
/// les événements après avoir donné l'autre au labyrinthe.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    events: Rc<RefCell<Vec<RenderEvent>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.borrow().clone()
    }

    /// Segments tracés avec le style donné, dans l'ordre.
    pub fn lines(&self, stroke: Stroke) -> Vec<Line> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match *event {
                RenderEvent::Line { line, stroke: s } if s == stroke => Some(line),
                _ => None,
            })
            .collect()
    }

    pub fn refresh_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, RenderEvent::Refresh))
            .count()
    }
}

impl RenderPort for RecordingRenderer {
    fn draw_line(&mut self, line: Line, stroke: Stroke) {
        self.events.borrow_mut().push(RenderEvent::Line { line, stroke });
    }

    fn refresh(&mut self) {
        self.events.borrow_mut().push(RenderEvent::Refresh);
    }
}

/// Écrit chaque événement sous forme d'une ligne JSON.
///
/// À la première erreur d'écriture le flux est abandonné (un visualiseur
/// qui ferme son entrée ne doit pas interrompre la génération).
pub struct TraceRenderer<W: Write> {
    out: W,
    broken: bool,
}

impl<W: Write> TraceRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, broken: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &RenderEvent) {
        if self.broken {
            return;
        }
        let res = serde_json::to_writer(&mut self.out, event)
            .map_err(std::io::Error::from)
            .and_then(|_| self.out.write_all(b"\n"));
        if let Err(e) = res {
            warn!("render trace stopped: {}", e);
            self.broken = true;
        }
    }
}

impl<W: Write> RenderPort for TraceRenderer<W> {
    fn draw_line(&mut self, line: Line, stroke: Stroke) {
        self.emit(&RenderEvent::Line { line, stroke });
    }

    fn refresh(&mut self) {
        self.emit(&RenderEvent::Refresh);
        if !self.broken {
            if let Err(e) = self.out.flush() {
                warn!("render trace stopped: {}", e);
                self.broken = true;
            }
        }
    }
}

/// Port optionnel + cadence d'animation.
///
/// Chaque étape dessinée est suivie d'un `refresh` puis d'une pause de
/// `frame_delay`. Sans port, rien n'est fait.
pub struct Animator {
    port: Option<Box<dyn RenderPort>>,
    frame_delay: Duration,
}

impl Animator {
    pub fn new(port: Option<Box<dyn RenderPort>>, frame_delay: Duration) -> Self {
        Self { port, frame_delay }
    }

    /// Aucun port, aucune pause.
    pub fn headless() -> Self {
        Self::new(None, Duration::ZERO)
    }

    pub fn is_attached(&self) -> bool {
        self.port.is_some()
    }

    pub fn draw_cell(&mut self, cell: &Cell) {
        if let Some(port) = self.port.as_mut() {
            port.draw_cell(cell);
            self.animate();
        }
    }

    /// Sans rectangle des deux côtés, rien n'est tracé : pas de pause non plus.
    pub fn draw_move(&mut self, from: &Cell, to: &Cell, backtrack: bool) {
        if from.bounds.is_none() || to.bounds.is_none() {
            return;
        }
        if let Some(port) = self.port.as_mut() {
            port.draw_move(from, to, backtrack);
            self.animate();
        }
    }

    pub fn animate(&mut self) {
        let Some(port) = self.port.as_mut() else {
            return;
        };
        port.refresh();
        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }
    }
}
