//! Template file contents
//!
//! Handlebars sources for every file synthesized into a new service. The
//! render context is the serialized [`ServiceConfig`](crate::ServiceConfig)
//! plus `application_class`.

/// Spring Boot entry point
pub const APPLICATION_KT: &str = r"package {{package_name}}

import org.springframework.boot.autoconfigure.SpringBootApplication
import org.springframework.boot.runApplication

@SpringBootApplication
class {{application_class}}

fun main(args: Array<String>) {
    runApplication<{{application_class}}>(*args)
}
";

/// Health endpoint controller
pub const HEALTH_CONTROLLER_KT: &str = r#"package {{package_name}}.controller

import org.springframework.http.ResponseEntity
import org.springframework.web.bind.annotation.GetMapping
import org.springframework.web.bind.annotation.RequestMapping
import org.springframework.web.bind.annotation.RestController

@RestController
@RequestMapping("/api/v1")
class HealthController {

    @GetMapping("/health")
    fun health(): ResponseEntity<Map<String, String>> {
        return ResponseEntity.ok(
            mapOf(
                "status" to "UP",
                "service" to "{{service_name}}"
            )
        )
    }
}
"#;

/// Integration test hitting the health endpoint
pub const HEALTH_CONTROLLER_IT_KT: &str = r#"package {{package_name}}.integration

import org.junit.jupiter.api.Test
import org.springframework.beans.factory.annotation.Autowired
import org.springframework.boot.test.context.SpringBootTest
import org.springframework.boot.test.web.client.TestRestTemplate
import org.springframework.boot.test.web.server.LocalServerPort
import org.springframework.http.HttpStatus
import org.springframework.test.context.ActiveProfiles

@SpringBootTest(webEnvironment = SpringBootTest.WebEnvironment.RANDOM_PORT)
@ActiveProfiles("test")
class HealthControllerIT {

    @LocalServerPort
    private var port: Int = 0

    @Autowired
    private lateinit var restTemplate: TestRestTemplate

    @Test
    fun `health endpoint should return OK`() {
        val response = restTemplate.getForEntity(
            "http://localhost:$port/api/v1/health",
            Map::class.java
        )

        assert(response.statusCode == HttpStatus.OK)
        assert(response.body?.get("status") == "UP")
        assert(response.body?.get("service") == "{{service_name}}")
    }
}
"#;

/// Runtime configuration
pub const APPLICATION_YML: &str = r"server:
  port: 8080
  servlet:
    context-path: /

spring:
  application:
    name: {{service_name}}
  profiles:
    active: dev
  datasource:
    url: jdbc:postgresql://localhost:5432/{{db_name}}
    username: postgres
    password: postgres
    driver-class-name: org.postgresql.Driver

  jpa:
    hibernate:
      ddl-auto: validate
    show-sql: false
    properties:
      hibernate:
        dialect: org.hibernate.dialect.PostgreSQLDialect
        format_sql: true

  flyway:
    enabled: true
    locations: classpath:db/migration
    baseline-on-migrate: true

management:
  endpoints:
    web:
      exposure:
        include: health,info,prometheus,metrics
  endpoint:
    health:
      show-details: always
  metrics:
    export:
      prometheus:
        enabled: true

logging:
  level:
    {{package_name}}: INFO
    org.springframework.web: INFO
    org.hibernate.SQL: DEBUG
    org.hibernate.type.descriptor.sql.BasicBinder: TRACE
";

/// Test-profile configuration (in-memory H2, no Flyway)
pub const APPLICATION_TEST_YML: &str = r"spring:
  datasource:
    url: jdbc:h2:mem:testdb
    driver-class-name: org.h2.Driver
    username: sa
    password:

  jpa:
    hibernate:
      ddl-auto: create-drop
    show-sql: true

  flyway:
    enabled: false

logging:
  level:
    {{package_name}}: DEBUG
";

/// First Flyway migration, left for the service to fill in
pub const MIGRATION_INITIAL_SQL: &str = r"-- Initial schema for {{service_name}}
-- Add your tables here

-- Example:
-- CREATE TABLE IF NOT EXISTS users (
--     id SERIAL PRIMARY KEY,
--     email VARCHAR(255) UNIQUE NOT NULL,
--     created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
--     updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
-- );
";

/// Gradle settings naming the root project
pub const SETTINGS_GRADLE_KTS: &str = r#"rootProject.name = "{{service_name}}"
"#;
