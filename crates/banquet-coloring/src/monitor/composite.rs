// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Monitoring combinator
//!
//! `CompositeColoringMonitor` forwards every event to its children in
//! insertion order, so logging and test probes can be attached to the same run.

use crate::{
    engine::RunPhase,
    graph::conflict::GraphSummary,
    index::{Color, VertexIndex},
    monitor::coloring_monitor::ColoringMonitor,
    stats::ColoringStatistics,
};

/// A monitor that aggregates multiple monitors and forwards events to all of them.
pub struct CompositeColoringMonitor<'a> {
    monitors: Vec<Box<dyn ColoringMonitor + 'a>>,
}

impl Default for CompositeColoringMonitor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CompositeColoringMonitor<'a> {
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: ColoringMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn ColoringMonitor + 'a>) {
        self.monitors.push(monitor);
    }

    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn ColoringMonitor + 'a>] {
        &self.monitors
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.monitors.clear();
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a> FromIterator<Box<dyn ColoringMonitor + 'a>> for CompositeColoringMonitor<'a> {
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn ColoringMonitor + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl ColoringMonitor for CompositeColoringMonitor<'_> {
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeColoringMonitor"
    }

    #[inline(always)]
    fn on_enter_run(&mut self, strategy: &str, summary: &GraphSummary) {
        for monitor in &mut self.monitors {
            monitor.on_enter_run(strategy, summary);
        }
    }

    #[inline(always)]
    fn on_phase(&mut self, phase: RunPhase) {
        for monitor in &mut self.monitors {
            monitor.on_phase(phase);
        }
    }

    #[inline(always)]
    fn on_vertex_colored(&mut self, vertex: VertexIndex, color: Color) {
        for monitor in &mut self.monitors {
            monitor.on_vertex_colored(vertex, color);
        }
    }

    #[inline(always)]
    fn on_exit_run(&mut self, statistics: &ColoringStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_run(statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    struct Recorder {
        tag: &'static str,
        events: Rc<RefCell<Vec<String>>>,
    }

    impl ColoringMonitor for Recorder {
        fn name(&self) -> &str {
            self.tag
        }

        fn on_enter_run(&mut self, strategy: &str, _summary: &GraphSummary) {
            self.events
                .borrow_mut()
                .push(format!("{}:enter:{}", self.tag, strategy));
        }

        fn on_phase(&mut self, phase: RunPhase) {
            self.events
                .borrow_mut()
                .push(format!("{}:phase:{}", self.tag, phase));
        }

        fn on_vertex_colored(&mut self, vertex: VertexIndex, color: Color) {
            self.events.borrow_mut().push(format!(
                "{}:colored:{}:{}",
                self.tag,
                vertex.get(),
                color.get()
            ));
        }

        fn on_exit_run(&mut self, _statistics: &ColoringStatistics) {
            self.events.borrow_mut().push(format!("{}:exit", self.tag));
        }
    }

    fn summary() -> GraphSummary {
        GraphSummary {
            num_clients: 1,
            num_vertices: 1,
            num_edges: 0,
            max_degree: 0,
            max_occupancy: 1,
            table_capacity: 1,
        }
    }

    #[test]
    fn test_fans_out_in_insertion_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut composite = CompositeColoringMonitor::with_capacity(2);
        composite.add_monitor(Recorder {
            tag: "a",
            events: Rc::clone(&events),
        });
        composite.add_monitor_boxed(Box::new(Recorder {
            tag: "b",
            events: Rc::clone(&events),
        }));
        assert_eq!(composite.len(), 2);

        composite.on_enter_run("DSatur", &summary());
        composite.on_phase(RunPhase::GraphBuilt);
        composite.on_vertex_colored(VertexIndex::new(0), Color::new(1));
        composite.on_exit_run(&ColoringStatistics::default());

        assert_eq!(
            *events.borrow(),
            vec![
                "a:enter:DSatur",
                "b:enter:DSatur",
                "a:phase:GraphBuilt",
                "b:phase:GraphBuilt",
                "a:colored:0:1",
                "b:colored:0:1",
                "a:exit",
                "b:exit",
            ]
        );
    }

    #[test]
    fn test_empty_and_clear() {
        let mut composite: CompositeColoringMonitor = std::iter::empty().collect();
        assert!(composite.is_empty());
        composite.on_phase(RunPhase::Applied);

        composite.add_monitor(crate::monitor::no_op::NoOperationMonitor::new());
        assert_eq!(composite.monitors()[0].name(), "NoOperationMonitor");
        composite.clear();
        assert!(composite.is_empty());
        assert_eq!(composite.name(), "CompositeColoringMonitor");
    }
}
