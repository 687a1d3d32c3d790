//! Embedded output templates.

/// docker-compose.yml template, rendered against a serialized
/// `ComposeConfig`. Keys a service does not carry are absent from the
/// context, so the conditionals below skip their sections entirely.
pub const DOCKER_COMPOSE: &str = r#"services:
{%- for name, service in services %}
  {{ name }}:
{%- if service.build %}
    build:
      context: {{ service.build.context }}
{%- endif %}
{%- if service.image %}
    image: {{ service.image }}
{%- endif %}
{%- if service.ports %}
    ports:
{%- for port in service.ports %}
      - "{{ port }}"
{%- endfor %}
{%- endif %}
{%- if service.environment %}
    environment:
{%- for key, value in service.environment %}
      {{ key }}: {{ value }}
{%- endfor %}
{%- endif %}
{%- if service.volumes %}
    volumes:
{%- for volume in service.volumes %}
      - {{ volume }}
{%- endfor %}
{%- endif %}
{%- if service.depends_on %}
    depends_on:
{%- for dependency in service.depends_on %}
      - {{ dependency }}
{%- endfor %}
{%- endif %}
{%- endfor %}
{%- if volumes %}

volumes:
{%- for name, spec in volumes %}
  {{ name }}:
{%- endfor %}
{%- endif %}
"#;
