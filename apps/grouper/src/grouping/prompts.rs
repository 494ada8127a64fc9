// Prompt constants and builders for the grouping call.
// The instruction text is in Russian because the aggregator's output taxonomy
// (events, categories, persons) is Russian-language regardless of the source
// language of a post.

use serde::Serialize;

use crate::models::{KnownTaxonomy, Post};

/// System prompt template. Replace `{known_events}`, `{known_categories}` and
/// `{known_persons}` before sending.
const GROUPING_SYSTEM_TEMPLATE: &str = r#"
Ты — ИИ-ассистент в новостном агрегаторе. Твоя задача — анализировать и структурировать входящий поток новостей.

Твоя основная цель: сгруппировать новости по **категориям** и **событиям**.

Тебе на вход будет подан список новостей в формате JSON: `{title:заголовок, pubdate:дата}`.
Ты должен вернуть JSON-массив, где для каждой новости указаны соответствующие поля.

---

### **Правила и определения:**

**1. Событие (event):**
- **Что это?** Событие — это КОНКРЕТНЫЙ инфоповод. Его цель — объединить новости из РАЗНЫХ источников, рассказывающие об ОДНОМ и том же происшествии, выступлении или явлении.
- **Каким оно должно быть?** МАКСИМАЛЬНО КОНКРЕТНЫМ. Не "Политика", а "Выступление [имя спикера] на саммите G20 15 ноября". Не "Авария", а "Крупное ДТП на трассе М-5 с участием бензовоза".
- **Что включать в название события?** Если в заголовке есть дата, место, участники, тема высказывания — всё это должно быть в названии события.
- **Когда не нужно?** Если новость не описывает конкретное событие (например, это еженедельный аналитический отчет, обзор рынка), то поле `event` можно не добавлять.
- **Существующие события:** Сначала проверь список уже существующих событий: `{known_events}`. Если новость подходит под одно из них — используй его. Если нет — создай новое по правилам выше.

**2. Категория (category):**
- **Что это?** Категория — это ОБЩАЯ тема новости. В отличие от события, категория может объединять новости о разных инфоповодах. У одной новости может быть несколько категорий.
- **Примеры:** "Политика", "Экономика", "Спорт", "Технологии", "Происшествия".
- **Существующие категории:** Проверь список: `{known_categories}`. Используй существующие, если подходят. Если нет — можешь создать новую, но старайся не плодить слишком много похожих.

**3. Упомянутые личности (persons):**
- **Кого добавлять?** Только людей, у которых указаны ИМЯ и/или ФАМИЛИЯ.
- **Кого НЕ добавлять?** Должности и титулы без имени ("министр", "глава компании") в это поле не вносятся.
- **Формат:** Массив строк, например: `["Иван Иванов", "Сергей Петров"]`.
- **Существующие личности:** Если упомянутый человек есть в списке `{known_persons}`, используй имя из списка.

**4. Заголовки (title):**
- **title:** Всегда содержит оригинальный заголовок новости, который ты получил.
**5. Язык:**
- Всегда отвечай на русском. Поля `event`, `category`, `persons` должны быть на РУССКОМ языке, даже если оригинальный заголовок новости на английском.

---

### **Итоговый формат ответа:**

Ты должен вернуть JSON-массив объектов. Каждый объект должен соответствовать одной новости и иметь следующую структуру:
`{
  "title": "Оригинальный заголовок из входных данных",
  "event": "(опционально) Конкретное событие, к которому относится новость",
  "persons": "(опционально) [Массив имен и фамилий упомянутых людей]",
  "category": "[Массив из одной или нескольких категорий]"
}`
Поле `category` является обязательным всегда.
"#;

/// Renders the grouping instruction with the caller's known taxonomy joined
/// as comma-separated lists. Infallible; empty lists render as empty text.
pub fn build_system_prompt(taxonomy: &KnownTaxonomy) -> String {
    GROUPING_SYSTEM_TEMPLATE
        .replace("{known_events}", &taxonomy.events.join(", "))
        .replace("{known_categories}", &taxonomy.categories.join(", "))
        .replace("{known_persons}", &taxonomy.persons.join(", "))
}

/// Serializes the batch as a JSON array of `{title, pubdate}` pairs inside a
/// one-line instruction. serde_json leaves non-ASCII characters unescaped, so
/// titles stay readable for the model.
pub fn build_user_prompt(posts: &[Post]) -> Result<String, serde_json::Error> {
    #[derive(Serialize)]
    struct PostRef<'a> {
        title: &'a str,
        pubdate: &'a str,
    }

    let items: Vec<PostRef> = posts
        .iter()
        .map(|p| PostRef {
            title: &p.title,
            pubdate: &p.pubdate,
        })
        .collect();

    Ok(format!(
        "Твой набор новостей: {}",
        serde_json::to_string(&items)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_embeds_taxonomy_lists() {
        let taxonomy = KnownTaxonomy {
            events: vec!["Саммит G20".to_string(), "Выборы 2026".to_string()],
            categories: vec!["Политика".to_string()],
            persons: vec!["Иван Иванов".to_string()],
        };
        let prompt = build_system_prompt(&taxonomy);
        assert!(prompt.contains("Саммит G20, Выборы 2026"));
        assert!(prompt.contains("Проверь список: `Политика`"));
        assert!(prompt.contains("есть в списке `Иван Иванов`"));
        assert!(!prompt.contains("{known_events}"));
    }

    #[test]
    fn test_system_prompt_empty_taxonomy_does_not_fail() {
        let prompt = build_system_prompt(&KnownTaxonomy::default());
        assert!(prompt.contains("существующих событий: ``"));
    }

    #[test]
    fn test_user_prompt_preserves_unicode_titles() {
        let posts = vec![Post::new("Матч «Спартак» против «Зенита»", "2026-08-20")];
        let prompt = build_user_prompt(&posts).unwrap();
        assert!(prompt.starts_with("Твой набор новостей: "));
        assert!(prompt.contains(r#""title":"Матч «Спартак» против «Зенита»""#));
        // Non-ASCII must stay readable, not become \u escapes.
        assert!(!prompt.contains("\\u"));
    }

    #[test]
    fn test_user_prompt_serializes_only_title_and_pubdate() {
        let mut post = Post::new("A", "d1");
        post.categories = vec!["Спорт".to_string()];
        let prompt = build_user_prompt(&[post]).unwrap();
        assert!(prompt.contains(r#"[{"title":"A","pubdate":"d1"}]"#));
        assert!(!prompt.contains("categories"));
    }

    #[test]
    fn test_user_prompt_empty_batch() {
        let prompt = build_user_prompt(&[]).unwrap();
        assert_eq!(prompt, "Твой набор новостей: []");
    }
}
