//! Built-in rules for Spring Boot, Gradle and Maven console output.
//!
//! Registration order matters: specific shapes come before the generic
//! `[LEVEL] ...` catch-all at the end, which would otherwise shadow them.

use crossterm::style::{Color, ContentStyle, Stylize};
use logtint_core::prelude::*;

use crate::field::names;
use crate::preprocess::{frame_ownership, sql_debug};
use crate::rule::Rule;
use crate::style::{FieldStyles, StyleOp};

/// ISO-8601 (Boot 3) or space-separated (Boot 2 / logback) timestamp with
/// millisecond precision and an optional zone offset
const TIMESTAMP: &str =
    r"\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}[.,]\d{3}(?:Z|[+-]\d{2}:?\d{2})?";

/// Leading whitespace is matched lazily so the level keeps one space of
/// padding in front of it
const LEVEL: &str = r"(\s*?)(?P<level>\s\w+)";

const LOG_LEVELS: &str = "INFO|WARNING|WARN|ERROR|DEBUG|TRACE|FATAL";

/// Every built-in rule, in registration order
pub fn builtin_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        spring_log()?,
        hibernate_sql()?,
        exception()?,
        stack_frame()?,
        omitted_frames()?,
        gradle_task()?,
        build_result()?,
        spring_banner()?,
        spring_boot_version()?,
        maven_level()?,
    ])
}

fn spring_log() -> Result<Rule> {
    let tail = r"(\s+)(?P<logger>\S+)(\s+)(?P<colon>:)(\s*)(?P<message>.*)$";
    let patterns = [
        // Boot 3.2+: application name column
        format!(
            r"^(?P<timestamp>{TIMESTAMP}){LEVEL}(\s+)(?P<pid>\d+)(\s+)(?P<separator>---)(\s+)(?P<application>\[[^\]]*\])(\s+)(?P<thread>\[[^\]]*\]){tail}"
        ),
        format!(
            r"^(?P<timestamp>{TIMESTAMP}){LEVEL}(\s+)(?P<pid>\d+)(\s+)(?P<separator>---)(\s+)(?P<thread>\[[^\]]*\]){tail}"
        ),
        // Plain logback pattern: `ts [thread] LEVEL logger - msg`
        format!(
            r"^(?P<timestamp>{TIMESTAMP})(\s+)(?P<thread>\[[^\]]*\]){LEVEL}(\s+)(?P<logger>\S+)(\s+)(?P<colon>-)(\s*)(?P<message>.*)$"
        ),
    ];

    let styles = FieldStyles::new()
        .with(names::TIMESTAMP, StyleOp::plain(ContentStyle::new().italic().dim()))
        .with(names::LEVEL, StyleOp::Severity)
        .with("pid", StyleOp::fg(Color::DarkMagenta))
        .with("separator", StyleOp::faint())
        .with("application", StyleOp::faint())
        .with("thread", StyleOp::faint())
        .with(names::LOGGER, StyleOp::Logger)
        .with("colon", StyleOp::faint())
        .with(names::MESSAGE, StyleOp::Urls)
        .with(names::SQL_DEBUG, StyleOp::faint());

    Ok(Rule::new("spring-log", patterns, styles)?.with_preprocessor(sql_debug))
}

fn hibernate_sql() -> Result<Rule> {
    Rule::new(
        "hibernate-sql",
        [r"^(Hibernate: )(?P<query>.*)$"],
        FieldStyles::new().with("query", StyleOp::faint()),
    )
}

fn exception() -> Result<Rule> {
    let name = r"(?P<exception_path>[^ ]+\.)(?P<exception_name>[^ ]*(?:Exception|Error))";
    let caused_by = r"(?P<caused_by>\s*(?:Caused by|Suppressed): )?";
    let patterns = [
        format!(r"^{caused_by}{name}(?P<colon>:)(?P<message>.*)$"),
        format!(r#"^(?P<caused_by>Exception in thread "[^"]*" ){name}(?P<colon>:)(?P<message>.*)$"#),
        format!(r#"^(?P<caused_by>Exception in thread "[^"]*" )?{name}$"#),
        format!(r"^{caused_by}{name}$"),
    ];

    let styles = FieldStyles::new()
        .with("caused_by", StyleOp::fg_bold(Color::DarkRed))
        .with("exception_path", StyleOp::fg(Color::DarkRed))
        .with("exception_name", StyleOp::fg_bold(Color::DarkRed))
        .with("colon", StyleOp::plain(ContentStyle::new().with(Color::DarkRed).dim()))
        .with(names::MESSAGE, StyleOp::Urls);

    Rule::new("exception", patterns, styles)
}

fn stack_frame() -> Result<Rule> {
    let head = r"^(?P<at>[\t ]+at )(?P<class>[^ ()]+\.)(?P<method>[^ ()]+\()";
    let jar = r"(?P<jar> ~?\[[^ \]]+:[^ \]]+\])?";
    let patterns = [
        format!(r"{head}(?P<file>[^ ()]+:\d+)(?P<method__close>\)){jar}"),
        format!(r"{head}(?P<no_file>Native Method|Unknown Source)(?P<method__close>\)){jar}"),
    ];

    let accent = Color::DarkCyan;
    let styles = FieldStyles::new()
        .with("at", StyleOp::fg_bold(Color::DarkRed))
        .with(names::CLASS, StyleOp::faint())
        .with(names::FILE, StyleOp::bold())
        .with(names::NO_FILE, StyleOp::plain(ContentStyle::new().dim().italic()))
        .with("jar", StyleOp::faint())
        .with(names::INTERNAL_FRAME, StyleOp::faint())
        .with(names::PROJECT_CLASS, StyleOp::fg(accent))
        .with(names::PROJECT_METHOD, StyleOp::fg(accent))
        .with(names::PROJECT_FILE, StyleOp::fg_bold(accent))
        .with(names::PROJECT_NO_FILE, StyleOp::fg(accent));

    Ok(Rule::new("stack-frame", patterns, styles)?.with_preprocessor(frame_ownership))
}

fn omitted_frames() -> Result<Rule> {
    Rule::new(
        "omitted-frames",
        [r"^(?P<omitted>[\t ]+\.\.\. \d+ (?:more|common frames omitted))$"],
        FieldStyles::new().with("omitted", StyleOp::faint()),
    )
}

fn gradle_task() -> Result<Rule> {
    Rule::new(
        "gradle-task",
        [r"^(> Task )(?P<name>:[^ ]+)(?P<state> [^ ]+)?$"],
        FieldStyles::new()
            .with("name", StyleOp::bold())
            .with("state", StyleOp::TaskOutcome),
    )
}

fn build_result() -> Result<Rule> {
    Rule::new(
        "build-result",
        [r"^(?:(?P<successful>BUILD SUCCESSFUL)|(?P<failed>BUILD FAILED))( in .+)$"],
        FieldStyles::new()
            .with("successful", StyleOp::fg_bold(Color::DarkGreen))
            .with("failed", StyleOp::fg_bold(Color::DarkRed)),
    )
}

/// Anchored pattern matching `parts` literally, one named group per part
fn literal_line(parts: &[(&str, &str)]) -> String {
    let body: String = parts
        .iter()
        .map(|(name, text)| format!("(?P<{name}>{})", regex::escape(text)))
        .collect();
    format!("^{body}$")
}

fn spring_banner() -> Result<Rule> {
    let patterns = [
        literal_line(&[
            ("crystal", "  ."),
            ("logo", "   ____          _            "),
            ("chevrons", "__ _ _"),
        ]),
        literal_line(&[
            ("crystal", r" /\\"),
            ("logo", " / ___'_ __ _ _(_)_ __  __ _ "),
            ("chevrons", r"\ \ \ \"),
        ]),
        literal_line(&[
            ("crystal", "( ( )"),
            ("logo", r"\___ | '_ | '_| | '_ \/ _` | "),
            ("chevrons", r"\ \ \ \"),
        ]),
        literal_line(&[
            ("crystal", r" \\/"),
            ("logo", "  ___)| |_)| | | | | || (_| |  "),
            ("chevrons", ") ) ) )"),
        ]),
        literal_line(&[
            ("crystal", "  '  "),
            ("logo", r"|____| .__|_| |_|_| |_\__, |"),
            ("chevrons", " / / / /"),
        ]),
        literal_line(&[
            ("underline", " ========="),
            ("logo", "|_|"),
            ("underline__2", "=============="),
            ("logo__2", "|___/"),
            ("underline__3", "="),
            ("chevrons", "/_/_/_/"),
        ]),
    ];

    let green = Color::DarkGreen;
    let styles = FieldStyles::new()
        .with("crystal", StyleOp::fg_bold(green))
        .with("logo", StyleOp::fg(green))
        .with("chevrons", StyleOp::fg(green))
        .with("underline", StyleOp::bold());

    Rule::new("spring-banner", patterns, styles)
}

fn spring_boot_version() -> Result<Rule> {
    Rule::new(
        "spring-boot-version",
        [r"^(?P<name> :: Spring Boot :: )(\s*)(?P<version>.+)$"],
        FieldStyles::new()
            .with("name", StyleOp::bold())
            .with("version", StyleOp::faint()),
    )
}

fn maven_level() -> Result<Rule> {
    let patterns = [
        r"^(?P<level>\[INFO\])( )(?P<successful>BUILD SUCCESS)$".to_string(),
        r"^(?P<level>\[(?:INFO|ERROR)\])( )(?P<failed>BUILD FAILURE)$".to_string(),
        format!(r"^(?P<level>\[(?:{LOG_LEVELS})\])(?P<message>.*)$"),
    ];

    let styles = FieldStyles::new()
        .with(names::LEVEL, StyleOp::SeverityText)
        .with(names::MESSAGE, StyleOp::Urls)
        .with("successful", StyleOp::fg_bold(Color::DarkGreen))
        .with("failed", StyleOp::fg_bold(Color::DarkRed));

    Rule::new("maven-level", patterns, styles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::BeautifyContext;
    use crate::field::{reassemble, Field};
    use logtint_core::strip_ansi_codes;

    fn rule(name: &str) -> Rule {
        builtin_rules()
            .unwrap()
            .into_iter()
            .find(|r| r.name() == name)
            .unwrap()
    }

    fn field<'a>(fields: &[Field<'a>], name: &str) -> Option<&'a str> {
        fields.iter().find(|f| f.is_named(name)).map(|f| f.value)
    }

    #[test]
    fn test_all_rules_compile_in_order() {
        let names: Vec<_> = builtin_rules().unwrap().iter().map(Rule::name).collect();
        assert_eq!(
            names,
            vec![
                "spring-log",
                "hibernate-sql",
                "exception",
                "stack-frame",
                "omitted-frames",
                "gradle-task",
                "build-result",
                "spring-banner",
                "spring-boot-version",
                "maven-level",
            ]
        );
    }

    #[test]
    fn test_spring_boot_3_line() {
        let rule = rule("spring-log");
        let line = "2024-01-01T10:00:00.000+00:00 INFO  12345 --- [main] com.example.App : starting up";

        let fields = rule.extract(line).unwrap();
        assert_eq!(field(&fields, "timestamp"), Some("2024-01-01T10:00:00.000+00:00"));
        assert_eq!(field(&fields, "level"), Some(" INFO"));
        assert_eq!(field(&fields, "pid"), Some("12345"));
        assert_eq!(field(&fields, "logger"), Some("com.example.App"));
        assert_eq!(field(&fields, "message"), Some("starting up"));
        assert_eq!(field(&fields, "application"), None);
        assert_eq!(reassemble(&fields), line);

        let out = rule.apply(line, &BeautifyContext::new()).unwrap();
        assert_eq!(strip_ansi_codes(&out), line);
    }

    #[test]
    fn test_spring_boot_application_column() {
        let rule = rule("spring-log");
        let line = "2024-03-05T09:15:42.123+01:00  WARN 4242 --- [orders] [           main] c.e.o.OrderService                       : Retrying in 5s";

        let fields = rule.extract(line).unwrap();
        assert_eq!(field(&fields, "application"), Some("[orders]"));
        assert_eq!(field(&fields, "thread"), Some("[           main]"));
        assert_eq!(field(&fields, "level"), Some(" WARN"));
        assert_eq!(field(&fields, "message"), Some("Retrying in 5s"));
        assert_eq!(reassemble(&fields), line);
    }

    #[test]
    fn test_spring_boot_2_line() {
        let rule = rule("spring-log");
        let line = "2019-11-02 18:03:11.742  INFO 1 --- [  restartedMain] o.s.b.w.e.tomcat.TomcatWebServer         : Tomcat started on port(s): 8080 (http)";

        let fields = rule.extract(line).unwrap();
        assert_eq!(field(&fields, "timestamp"), Some("2019-11-02 18:03:11.742"));
        assert_eq!(field(&fields, "level"), Some(" INFO"));
        assert_eq!(reassemble(&fields), line);
    }

    #[test]
    fn test_logback_line() {
        let rule = rule("spring-log");
        let line = "2024-01-01 10:00:00,000 [main] ERROR com.example.App - boom";

        let fields = rule.extract(line).unwrap();
        assert_eq!(field(&fields, "thread"), Some("[main]"));
        assert_eq!(field(&fields, "level"), Some(" ERROR"));
        assert_eq!(field(&fields, "colon"), Some("-"));
        assert_eq!(field(&fields, "message"), Some("boom"));
    }

    #[test]
    fn test_hibernate_logger_relabels_statement() {
        let rule = rule("spring-log");
        let line = "2024-01-01T10:00:00.000+00:00 DEBUG 1 --- [main] org.hibernate.SQL : select o.id from orders o";

        let out = rule.apply(line, &BeautifyContext::new()).unwrap();
        assert_eq!(strip_ansi_codes(&out), line);
        assert!(out.ends_with("\x1b[2mselect o.id from orders o\x1b[0m"));
    }

    #[test]
    fn test_exception_lines() {
        let rule = rule("exception");

        let fields = rule
            .extract("java.lang.IllegalStateException: Failed to load context")
            .unwrap();
        assert_eq!(field(&fields, "exception_path"), Some("java.lang."));
        assert_eq!(field(&fields, "exception_name"), Some("IllegalStateException"));
        assert_eq!(field(&fields, "message"), Some(" Failed to load context"));
        assert_eq!(field(&fields, "caused_by"), None);

        let fields = rule
            .extract("Caused by: java.net.ConnectException: Connection refused")
            .unwrap();
        assert_eq!(field(&fields, "caused_by"), Some("Caused by: "));
        assert_eq!(field(&fields, "exception_name"), Some("ConnectException"));

        let fields = rule
            .extract(r#"Exception in thread "main" java.lang.StackOverflowError"#)
            .unwrap();
        assert_eq!(field(&fields, "exception_name"), Some("StackOverflowError"));

        assert!(rule.extract("Nothing to see here").is_none());
    }

    #[test]
    fn test_stack_frame_extraction() {
        let rule = rule("stack-frame");
        let line = "\tat com.example.Foo.bar(Foo.java:42)";

        let fields = rule.extract(line).unwrap();
        assert_eq!(field(&fields, "class"), Some("com.example.Foo."));
        assert_eq!(field(&fields, "method"), Some("bar("));
        assert_eq!(field(&fields, "file"), Some("Foo.java:42"));
        assert_eq!(reassemble(&fields), line);
    }

    #[test]
    fn test_stack_frame_must_start_the_line() {
        let rule = rule("stack-frame");
        assert!(rule
            .extract("Retry scheduled at com.example.Job.run(Job.java:12) by scheduler")
            .is_none());
        assert!(rule.extract("at com.example.Job.run(Job.java:12)").is_none());

        // Trailing text after the frame is kept
        let line = "    at com.example.Job.run(Job.java:12) [retry 2]";
        let fields = rule.extract(line).unwrap();
        assert_eq!(field(&fields, "file"), Some("Job.java:12"));
        assert_eq!(reassemble(&fields), line);
    }

    #[test]
    fn test_project_frame_uses_project_styles() {
        let rule = rule("stack-frame");
        let line = "\tat com.example.Foo.bar(Foo.java:42)";

        let library = rule.apply(line, &BeautifyContext::new()).unwrap();
        let project = rule
            .apply(line, &BeautifyContext::with_base_package("com.example"))
            .unwrap();

        assert_ne!(library, project);
        assert_eq!(strip_ansi_codes(&project), line);
        // Class is faint in library frames only
        assert!(library.contains("\x1b[2mcom.example.Foo."));
        assert!(!project.contains("\x1b[2mcom.example.Foo."));
        // Only the file position is bold in a project frame
        assert!(!project.contains("\x1b[1mbar("));
        assert!(project.contains("\x1b[1mFoo.java:42"));
    }

    #[test]
    fn test_native_and_jar_frames() {
        let rule = rule("stack-frame");

        let line = "\tat java.base/jdk.internal.reflect.NativeMethodAccessorImpl.invoke0(Native Method)";
        let fields = rule.extract(line).unwrap();
        assert_eq!(field(&fields, "no_file"), Some("Native Method"));

        let line = "\tat org.springframework.boot.SpringApplication.run(SpringApplication.java:335) ~[spring-boot-3.2.0.jar:3.2.0]";
        let fields = rule.extract(line).unwrap();
        assert_eq!(field(&fields, "jar"), Some(" ~[spring-boot-3.2.0.jar:3.2.0]"));
        assert_eq!(reassemble(&fields), line);
    }

    #[test]
    fn test_internal_frame_is_entirely_faint() {
        let rule = rule("stack-frame");
        let line = "\tat java.base/java.lang.Thread.run(Thread.java:833)";

        let out = rule.apply(line, &BeautifyContext::new()).unwrap();
        assert_eq!(strip_ansi_codes(&out), line);
        assert!(out.starts_with("\x1b[2m\tat "));
    }

    #[test]
    fn test_omitted_frames() {
        let rule = rule("omitted-frames");
        assert!(rule.extract("\t... 42 more").is_some());
        assert!(rule.extract("\t... 7 common frames omitted").is_some());
        assert!(rule.extract("... 42 more").is_none());
    }

    #[test]
    fn test_gradle_lines() {
        let rule = rule("gradle-task");
        let fields = rule.extract("> Task :compileJava UP-TO-DATE").unwrap();
        assert_eq!(field(&fields, "name"), Some(":compileJava"));
        assert_eq!(field(&fields, "state"), Some(" UP-TO-DATE"));

        let fields = rule.extract("> Task :bootRun").unwrap();
        assert_eq!(field(&fields, "state"), None);

        let rule = self::rule("build-result");
        let fields = rule.extract("BUILD SUCCESSFUL in 12s").unwrap();
        assert_eq!(field(&fields, "successful"), Some("BUILD SUCCESSFUL"));
        assert_eq!(field(&fields, "failed"), None);
        let fields = rule.extract("BUILD FAILED in 3s").unwrap();
        assert_eq!(field(&fields, "failed"), Some("BUILD FAILED"));
    }

    #[test]
    fn test_banner_lines_all_match() {
        let rule = rule("spring-banner");
        let banner = [
            "  .   ____          _            __ _ _",
            r" /\\ / ___'_ __ _ _(_)_ __  __ _ \ \ \ \",
            r"( ( )\___ | '_ | '_| | '_ \/ _` | \ \ \ \",
            r" \\/  ___)| |_)| | | | | || (_| |  ) ) ) )",
            r"  '  |____| .__|_| |_|_| |_\__, | / / / /",
            " =========|_|==============|___/=/_/_/_/",
        ];

        for line in banner {
            let fields = rule.extract(line).unwrap_or_else(|| panic!("no match: {line}"));
            assert_eq!(reassemble(&fields), line);
        }

        let fields = rule.extract(banner[5]).unwrap();
        let underline: Vec<_> = fields
            .iter()
            .filter(|f| f.is_named("underline"))
            .map(|f| f.value)
            .collect();
        assert_eq!(underline, vec![" =========", "==============", "="]);
    }

    #[test]
    fn test_spring_boot_version() {
        let rule = rule("spring-boot-version");
        let fields = rule.extract(" :: Spring Boot ::                (v3.2.0)").unwrap();
        assert_eq!(field(&fields, "version"), Some("(v3.2.0)"));
    }

    #[test]
    fn test_maven_lines() {
        let rule = rule("maven-level");

        let fields = rule.extract("[INFO] BUILD SUCCESS").unwrap();
        assert_eq!(field(&fields, "successful"), Some("BUILD SUCCESS"));

        let fields = rule.extract("[ERROR] BUILD FAILURE").unwrap();
        assert_eq!(field(&fields, "failed"), Some("BUILD FAILURE"));

        let fields = rule
            .extract("[WARNING] Using platform encoding (UTF-8 actually)")
            .unwrap();
        assert_eq!(field(&fields, "level"), Some("[WARNING]"));
        assert_eq!(field(&fields, "message"), Some(" Using platform encoding (UTF-8 actually)"));

        assert!(rule.extract("[NOTE] something").is_none());
    }
}
