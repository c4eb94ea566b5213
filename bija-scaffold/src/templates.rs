//! Built-in templates and template selection.

use bija_config::Config;

use crate::{EntityKind, Error, Result};

const COMPONENT: &str = r#"import React from 'react';

const <%= componentName %> = () => (
  <div>
    <%= componentName %>
  </div>
);

export default <%= componentName %>;
"#;

const COMPONENT_CLASS: &str = r#"import React from 'react';

class <%= componentName %> extends React.Component {
  constructor(props) {
    super(props);
  }

  render() {
    return (
      <div>
        <%= componentName %>
      </div>
    );
  }
}

export default <%= componentName %>;
"#;

const CONTAINER: &str = r#"import React from 'react';
import <%= componentName %> from '../components/<%= componentFileName %>';

const <%= containerName %> = (props) => (
  <<%= componentName %> {...props} />
);

export default <%= containerName %>;
"#;

const STORYBOOK: &str = r#"import React from 'react';
import {storiesOf} from '@storybook/react';
import {action} from '@storybook/addon-actions';
import <%= componentName %> from '../<%= componentFileName %>';

storiesOf('<%= moduleName %>', module)
  .add('default', () => (
    <<%= componentName %> />
  ));
"#;

const COMPONENT_TEST: &str = r#"const {describe, it} = global;
import {expect} from 'chai';
import {shallow} from 'enzyme';
import <%= componentName %> from '../<%= componentFileName %>';

describe('<%= moduleName %>.components.<%= componentFileName %>', () => {
  it('should do something');
});
"#;

const CONTAINER_TEST: &str = r#"const {describe, it} = global;
import {expect} from 'chai';
import {shallow} from 'enzyme';
import <%= containerName %> from '../<%= containerFileName %>';

describe('<%= moduleName %>.containers.<%= containerFileName %>', () => {
  it('should do something');
});
"#;

/// Which template of an entity kind to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFlavor {
    /// The entity file itself
    Entity { use_class: bool },
    /// The companion test file
    Test,
}

impl TemplateFlavor {
    fn is_test(&self) -> bool {
        matches!(self, TemplateFlavor::Test)
    }
}

/// Built-in template text, if one exists for the kind and flavor.
pub fn builtin(kind: EntityKind, flavor: TemplateFlavor) -> Option<&'static str> {
    match (kind, flavor) {
        (EntityKind::Component, TemplateFlavor::Entity { use_class: false }) => Some(COMPONENT),
        (EntityKind::Component, TemplateFlavor::Entity { use_class: true }) => {
            Some(COMPONENT_CLASS)
        }
        (EntityKind::Component, TemplateFlavor::Test) => Some(COMPONENT_TEST),
        (EntityKind::Container, TemplateFlavor::Entity { .. }) => Some(CONTAINER),
        (EntityKind::Container, TemplateFlavor::Test) => Some(CONTAINER_TEST),
        (EntityKind::Storybook, TemplateFlavor::Entity { .. }) => Some(STORYBOOK),
        (EntityKind::Storybook, TemplateFlavor::Test) | (EntityKind::Module, _) => None,
    }
}

/// Template text for an entity: a custom template from the config wins over the built-in.
pub fn template_text(config: &Config, kind: EntityKind, flavor: TemplateFlavor) -> Result<&str> {
    if let Some(custom) = config.custom_template(kind.as_str(), flavor.is_test()) {
        return Ok(&custom.text);
    }

    builtin(kind, flavor).ok_or_else(|| {
        Box::new(Error::MissingTemplate {
            kind: kind.to_string(),
            test: flavor.is_test(),
        })
    })
}
