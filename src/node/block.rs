use super::core::Node;
use super::params::BlockParameters;
use crate::error::Result;
use crate::layout::{Dimension, Orientation, Separator, shrink_to_fit};
use crate::metrics::RenderMetrics;
use crate::render::{Composition, RenderContext, Rendered, SiblingIndex, Style, compose};

/// A box of child nodes laid out along its orientation.
#[derive(Debug, Clone, Default)]
pub struct Block {
    parameters: BlockParameters,
    children: Vec<Node>,
}

impl Block {
    pub fn new(parameters: BlockParameters, children: Vec<Node>) -> Self {
        Self {
            parameters,
            children,
        }
    }

    pub fn parameters(&self) -> &BlockParameters {
        &self.parameters
    }

    pub(crate) fn parameters_mut(&mut self) -> &mut BlockParameters {
        &mut self.parameters
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn render(&self, context: &RenderContext) -> Result<Rendered> {
        let parameters = &self.parameters;
        let budget = ChildBudget {
            width: parameters.inner_width(context),
            height: parameters.inner_height(context),
            style: parameters.style.clone().or_else(|| context.style.clone()),
            total: self.children.len(),
        };

        let mut rendered = self
            .children
            .iter()
            .enumerate()
            .map(|(position, child)| child.render(&budget.context(context, position, budget.width)?))
            .collect::<Result<Vec<_>>>()?;

        let rewraps = match (parameters.orientation, budget.width) {
            (Orientation::Horizontal, Some(available)) => {
                self.refit(&mut rendered, available, &budget, context)?
            }
            _ => 0,
        };

        let desired_width = self.desired_width(&rendered, context);
        let mut metrics = RenderMetrics::new();
        metrics.record_block();
        for child in &rendered {
            metrics.absorb(&child.metrics());
        }
        metrics.record_rewraps(rewraps);

        let children: Vec<Composition> = rendered
            .into_iter()
            .map(Rendered::into_composition)
            .collect();
        let (composition, measured) = compose(children, parameters, context);
        Ok(Rendered::new(composition, measured, desired_width, metrics))
    }

    fn separator_columns(&self) -> usize {
        let between = self.children.len().saturating_sub(1);
        self.parameters.gap.main.as_ref().map_or(0, Separator::columns) * between
    }

    /// Re-render side-by-side children that overflow `available` columns.
    ///
    /// Returns how many children were rendered a second time.
    fn refit(
        &self,
        rendered: &mut [Rendered],
        available: usize,
        budget: &ChildBudget,
        context: &RenderContext,
    ) -> Result<usize> {
        let separators = self.separator_columns();
        let natural: Vec<usize> = rendered.iter().map(Rendered::width).collect();
        if natural.iter().sum::<usize>() + separators <= available {
            return Ok(0);
        }

        let floors: Vec<usize> = self
            .children
            .iter()
            .map(|child| child.fixed_width(Some(available)).unwrap_or(1))
            .collect();
        let fitted = shrink_to_fit(&natural, &floors, available.saturating_sub(separators));

        let mut rewraps = 0;
        for (position, child) in self.children.iter().enumerate() {
            if fitted[position] < natural[position] {
                let narrowed = budget.context(context, position, Some(fitted[position]))?;
                rendered[position] = child.render(&narrowed)?;
                rewraps += 1;
            }
        }
        Ok(rewraps)
    }

    fn desired_width(&self, rendered: &[Rendered], context: &RenderContext) -> usize {
        let parameters = &self.parameters;
        if let Some(width) = parameters.span_width(context) {
            return width;
        }
        let content = match parameters.orientation {
            Orientation::Vertical => rendered
                .iter()
                .map(|child| child.shape().desired_width)
                .max()
                .unwrap_or(0),
            Orientation::Horizontal => {
                rendered
                    .iter()
                    .map(|child| child.shape().desired_width)
                    .sum::<usize>()
                    + self.separator_columns()
            }
        };
        let desired = content + parameters.horizontal_insets();
        let bounds = parameters.box_bounds(Dimension::Width);
        let desired = bounds.min.map_or(desired, |min| desired.max(min));
        bounds.max.map_or(desired, |max| desired.min(max))
    }
}

/// What every child of one block is rendered under.
struct ChildBudget {
    width: Option<usize>,
    height: Option<usize>,
    style: Option<Style>,
    total: usize,
}

impl ChildBudget {
    fn context(
        &self,
        parent: &RenderContext,
        position: usize,
        width: Option<usize>,
    ) -> Result<RenderContext> {
        parent.child(
            width,
            self.height,
            self.style.clone(),
            SiblingIndex::new(position, self.total),
        )
    }
}
