//! Site footer.

use crate::site::Site;
use crate::vnode::{VNode, el};

const REPOSITORY: &str = "https://github.com/jorgebucaran/hyperapp";

pub fn footer(site: &Site) -> VNode {
    el("footer")
        .class("site-footer")
        .child(
            el("nav").class("footer-links").children([
                VNode::from(el("a").attr("href", REPOSITORY).text("Source")),
                VNode::from(
                    el("a")
                        .attr("href", format!("{REPOSITORY}/releases"))
                        .text(format!("v{}", site.version)),
                ),
                VNode::from(el("a").attr("href", "#top").text("Back to top")),
            ]),
        )
        .child(el("p").class("license").text("Released under the MIT License."))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vnode::Element;

    #[test]
    fn test_footer_links() {
        let tree = footer(&Site::new("Hyperapp", "2.0.4"));
        let links = tree.find_all(&|e: &Element| e.tag == "a");
        let texts: Vec<_> = links.iter().map(|a| a.text_content()).collect();
        assert_eq!(texts, ["Source", "v2.0.4", "Back to top"]);
        assert_eq!(links[2].get_attr("href"), Some("#top"));
    }
}
