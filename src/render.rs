use blog_core::Post;
use listing::ListingState;

/// Pure rendering of the listing page: a function of the posts and the
/// presence of a cursor, nothing else. Rendering the same state twice
/// yields byte-identical markup.
pub fn render_home(state: &ListingState) -> String {
    let mut posts = String::new();
    for post in &state.posts {
        posts.push_str(&render_post(post));
    }

    let load_more = match &state.next_page {
        Some(cursor) => format!(
            "<button type=\"button\" id=\"load-more\" data-next-page=\"{}\">Carregar mais posts</button>",
            html_escape::encode_double_quoted_attribute(cursor)
        ),
        None => String::new(),
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"pt-BR\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>home | spacetraveling</title>\n\
         </head>\n\
         <body>\n\
         <main class=\"container\">\n\
         <div class=\"posts\" id=\"posts\">\n{posts}</div>\n\
         {load_more}\n\
         </main>\n\
         {script}\n\
         </body>\n\
         </html>\n",
        posts = posts,
        load_more = load_more,
        script = LOAD_MORE_SCRIPT,
    )
}

fn render_post(post: &Post) -> String {
    let href = match &post.uid {
        Some(uid) => format!(
            "post/{}",
            html_escape::encode_double_quoted_attribute(uid)
        ),
        None => "#".to_string(),
    };

    let date = post
        .first_publication_date
        .as_deref()
        .unwrap_or("sem data");

    format!(
        "<a class=\"post\" href=\"{href}\">\
         <strong>{title}</strong>\
         <p>{subtitle}</p>\
         <span>\
         <time><span class=\"icon\">&#128197;</span>{date}</time>\
         <p><span class=\"icon\">&#128100;</span>{author}</p>\
         </span>\
         </a>\n",
        href = href,
        title = html_escape::encode_text(&post.data.title),
        subtitle = html_escape::encode_text(&post.data.subtitle),
        date = html_escape::encode_text(date),
        author = html_escape::encode_text(&post.data.author),
    )
}

/// Client side of the load-more control. Mirrors `render_post` so appended
/// items match the server-rendered ones, and disables the button while a
/// request is in flight so a double click cannot fire two overlapping
/// fetches.
const LOAD_MORE_SCRIPT: &str = r#"<script>
(function () {
  var button = document.getElementById('load-more');
  if (!button) return;
  var list = document.getElementById('posts');

  function esc(value) {
    var div = document.createElement('div');
    div.textContent = value == null ? '' : value;
    return div.innerHTML;
  }

  function renderPost(post) {
    var href = post.uid ? 'post/' + encodeURIComponent(post.uid) : '#';
    var date = post.first_publication_date || 'sem data';
    return '<a class="post" href="' + href + '">'
      + '<strong>' + esc(post.data.title) + '</strong>'
      + '<p>' + esc(post.data.subtitle) + '</p>'
      + '<span>'
      + '<time><span class="icon">&#128197;</span>' + esc(date) + '</time>'
      + '<p><span class="icon">&#128100;</span>' + esc(post.data.author) + '</p>'
      + '</span>'
      + '</a>';
  }

  button.addEventListener('click', function () {
    var cursor = button.dataset.nextPage;
    if (!cursor || button.disabled) return;
    button.disabled = true;

    fetch('/api/pagination?next_page=' + encodeURIComponent(cursor))
      .then(function (res) {
        if (!res.ok) throw new Error('pagination failed: ' + res.status);
        return res.json();
      })
      .then(function (page) {
        page.results.forEach(function (post) {
          list.insertAdjacentHTML('beforeend', renderPost(post));
        });
        if (page.next_page) {
          button.dataset.nextPage = page.next_page;
          button.disabled = false;
        } else {
          button.remove();
        }
      })
      .catch(function (err) {
        console.error(err);
        button.disabled = false;
      });
  });
})();
</script>"#;
