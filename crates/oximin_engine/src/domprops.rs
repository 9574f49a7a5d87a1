//! Property names defined by browser DOM and CSSOM interfaces.
//!
//! With `reserveDOMProperties` these are added to the property reserved list
//! so code talking to the browser keeps working after property mangling.

pub const DOM_PROPERTIES: &[&str] = &[
    "abort", "accept", "acceptCharset", "accessKey", "action", "activeElement", "add",
    "addedNodes", "addEventListener", "addRange", "adoptNode", "after", "alert", "align", "alink",
    "alt", "altitudeAngle", "altKey", "anchorNode", "anchorOffset", "anchors", "animate",
    "animation", "animationDelay", "animationDirection", "animationDuration", "animationFillMode",
    "animationIterationCount", "animationName", "animationPlayState", "animationTimingFunction",
    "append", "appendChild", "appendData", "applets", "arrayBuffer", "aspectRatio", "assign",
    "async", "atob", "attachShadow", "ATTRIBUTE_NODE", "attributeName", "attributeNamespace",
    "attributes", "audioTracks", "autocapitalize", "autocomplete", "autofocus", "autoplay",
    "availHeight", "availWidth", "back", "backdropFilter", "backfaceVisibility", "background",
    "backgroundAttachment", "backgroundBlendMode", "backgroundClip", "backgroundColor",
    "backgroundImage", "backgroundOrigin", "backgroundPosition", "backgroundRepeat",
    "backgroundSize", "baseURI", "before", "beginPath", "bezierCurveTo", "bgColor", "blob", "blur",
    "body", "border", "borderBottom", "borderBottomColor", "borderBottomLeftRadius",
    "borderBottomRightRadius", "borderBottomStyle", "borderBottomWidth", "borderCollapse",
    "borderColor", "borderImage", "borderLeft", "borderLeftColor", "borderLeftStyle",
    "borderLeftWidth", "borderRadius", "borderRight", "borderRightColor", "borderRightStyle",
    "borderRightWidth", "borderSpacing", "borderStyle", "borderTop", "borderTopColor",
    "borderTopLeftRadius", "borderTopRightRadius", "borderTopStyle", "borderTopWidth",
    "borderWidth", "bottom", "boxShadow", "boxSizing", "btoa", "bubbles", "button", "buttons",
    "cancelable", "cancelAnimationFrame", "cancelBubble", "canvas", "caption", "captureEvents",
    "caretColor", "CDATA_SECTION_NODE", "cells", "changedTouches", "characterSet", "charset",
    "checked", "checkValidity", "childElementCount", "childNodes", "children", "classList",
    "className", "clearData", "clearInterval", "clearRect", "clearTimeout", "clearWatch", "click",
    "clientHeight", "clientLeft", "clientTop", "clientWidth", "clientX", "clientY", "clip",
    "clipboardData", "clipPath", "cloneNode", "close", "CLOSED", "closed", "closePath", "closest",
    "CLOSING", "code", "color", "cols", "colSpan", "columnCount", "columnGap", "columns",
    "COMMENT_NODE", "compareDocumentPosition", "compatMode", "complete", "composedPath", "confirm",
    "CONNECTING", "contains", "contentDocument", "contentEditable", "contentType", "contentWindow",
    "context", "cookie", "cookieEnabled", "coords", "createAttribute", "createComment",
    "createDocumentFragment", "createElement", "createElementNS", "createEvent", "createImageData",
    "createLinearGradient", "createObjectURL", "createPattern", "createRadialGradient",
    "createRange", "createTextNode", "createTreeWalker", "credentials", "crossOrigin", "cssFloat",
    "cssRules", "cssText", "ctrlKey", "currentScript", "currentSrc", "currentTarget",
    "currentTime", "cursor", "customElements", "data", "dataset", "dataTransfer", "dateTime",
    "decodeURI", "decodeURIComponent", "default", "defaultChecked", "defaultPrevented",
    "defaultSelected", "defaultValue", "defaultView", "defer", "define", "deleteData", "deleteRow",
    "deltaMode", "deltaX", "deltaY", "deltaZ", "designMode", "detail", "devicePixelRatio", "dir",
    "direction", "disabled", "dispatchEvent", "display", "doctype", "document",
    "DOCUMENT_FRAGMENT_NODE", "DOCUMENT_NODE", "DOCUMENT_POSITION_CONTAINED_BY",
    "DOCUMENT_POSITION_CONTAINS", "DOCUMENT_POSITION_DISCONNECTED", "DOCUMENT_POSITION_FOLLOWING",
    "DOCUMENT_POSITION_IMPLEMENTATION_SPECIFIC", "DOCUMENT_POSITION_PRECEDING",
    "DOCUMENT_TYPE_NODE", "documentElement", "documentURI", "domain", "DONE", "download",
    "draggable", "drawImage", "dropEffect", "duration", "effectAllowed", "ELEMENT_NODE",
    "elementFromPoint", "elements", "ellipse", "embeds", "empty", "encodeURI",
    "encodeURIComponent", "encoding", "enctype", "ended", "ENTITY_NODE", "ENTITY_REFERENCE_NODE",
    "error", "escape", "evaluate", "event", "eventPhase", "execCommand", "fetch", "files", "fill",
    "fillRect", "fillStyle", "fillText", "filter", "firstChild", "firstElementChild", "flex",
    "flexBasis", "flexDirection", "flexFlow", "flexGrow", "flexShrink", "flexWrap", "float",
    "focus", "font", "fontFamily", "fontFeatureSettings", "fontSize", "fontStretch", "fontStyle",
    "fontVariant", "fontWeight", "forEach", "form", "formAction", "formData", "forms", "forward",
    "frameElement", "frames", "fullscreenElement", "gap", "geolocation", "getAllResponseHeaders",
    "getAttribute", "getAttributeNode", "getAttributeNS", "getBoundingClientRect",
    "getClientRects", "getComputedStyle", "getContext", "getCurrentPosition", "getData",
    "getElementById", "getElementsByClassName", "getElementsByName", "getElementsByTagName",
    "getElementsByTagNameNS", "getImageData", "getItem", "getModifierState", "getPropertyPriority",
    "getPropertyValue", "getRangeAt", "getResponseHeader", "getRootNode", "getSelection",
    "globalAlpha", "globalCompositeOperation", "go", "grid", "gridArea", "gridAutoColumns",
    "gridAutoFlow", "gridAutoRows", "gridColumn", "gridColumnEnd", "gridColumnStart", "gridRow",
    "gridRowEnd", "gridRowStart", "gridTemplate", "gridTemplateAreas", "gridTemplateColumns",
    "gridTemplateRows", "hasAttribute", "hasAttributeNS", "hasAttributes", "hasChildNodes",
    "hasFocus", "hash", "head", "headers", "HEADERS_RECEIVED", "height", "hidden", "history",
    "host", "hostname", "href", "hreflang", "hspace", "htmlFor", "httpEquiv", "id", "images",
    "implementation", "importNode", "indeterminate", "inert", "initEvent", "inlineSize",
    "innerHeight", "innerHTML", "innerText", "innerWidth", "input", "inputEncoding", "inputMode",
    "insertAdjacentElement", "insertAdjacentHTML", "insertAdjacentText", "insertBefore",
    "insertCell", "insertData", "insertRow", "isComposing", "isConnected", "isContentEditable",
    "isDefaultNamespace", "isEqualNode", "isSameNode", "isTrusted", "item", "json",
    "justifyContent", "justifyItems", "justifySelf", "key", "keyCode", "label", "lang", "language",
    "lastChild", "lastElementChild", "lastModified", "left", "letterSpacing", "lineCap",
    "lineHeight", "lineJoin", "lineTo", "lineWidth", "links", "listStyle", "listStyleImage",
    "listStylePosition", "listStyleType", "load", "loadend", "LOADING", "localName",
    "localStorage", "location", "lookupNamespaceURI", "lookupPrefix", "loop", "margin",
    "marginBottom", "marginLeft", "marginRight", "marginTop", "matches", "matchMedia", "maxHeight",
    "maxLength", "maxWidth", "measureText", "media", "metaKey", "method", "minHeight", "minLength",
    "minWidth", "mixBlendMode", "moveBy", "moveTo", "multiple", "muted", "namespaceURI",
    "naturalHeight", "naturalWidth", "navigator", "networkState", "newValue", "nextElementSibling",
    "nextSibling", "nodeName", "nodeType", "nodeValue", "normalize", "NOTATION_NODE", "noValidate",
    "now", "objectFit", "objectPosition", "offsetHeight", "offsetLeft", "offsetParent",
    "offsetTop", "offsetWidth", "offsetX", "offsetY", "oldValue", "onabort", "onafterprint",
    "onanimationend", "onbeforeprint", "onbeforeunload", "onblur", "oncanplay", "onchange",
    "onclick", "oncontextmenu", "oncopy", "oncut", "ondblclick", "ondrag", "ondragend",
    "ondragenter", "ondragleave", "ondragover", "ondragstart", "ondrop", "onended", "onerror",
    "onfocus", "onhashchange", "oninput", "oninvalid", "onkeydown", "onkeypress", "onkeyup",
    "onload", "onloadeddata", "onloadedmetadata", "onloadstart", "onmessage", "onmousedown",
    "onmouseenter", "onmouseleave", "onmousemove", "onmouseout", "onmouseover", "onmouseup",
    "onoffline", "ononline", "onpagehide", "onpageshow", "onpaste", "onpause", "onplay",
    "onplaying", "onpointerdown", "onpointermove", "onpointerup", "onpopstate", "onprogress",
    "onreadystatechange", "onreset", "onresize", "onscroll", "onsearch", "onseeked", "onseeking",
    "onselect", "onstorage", "onsubmit", "ontimeupdate", "ontoggle", "ontouchend", "ontouchmove",
    "ontouchstart", "ontransitionend", "onunload", "onvolumechange", "onwaiting", "onwheel",
    "opacity", "OPEN", "open", "OPENED", "opener", "options", "order", "origin", "outerHeight",
    "outerHTML", "outerWidth", "outline", "outlineColor", "outlineOffset", "outlineStyle",
    "outlineWidth", "overflow", "overflowWrap", "overflowX", "overflowY", "ownerDocument",
    "ownerElement", "padding", "paddingBottom", "paddingLeft", "paddingRight", "paddingTop",
    "pageX", "pageXOffset", "pageY", "pageYOffset", "parentElement", "parentNode", "pathname",
    "pattern", "pause", "paused", "performance", "perspective", "placeholder", "platform", "play",
    "playbackRate", "pointerEvents", "pointerId", "pointerType", "port", "position", "poster",
    "postMessage", "preload", "prepend", "preventDefault", "previousElementSibling",
    "previousSibling", "print", "PROCESSING_INSTRUCTION_NODE", "prompt", "protocol", "pushState",
    "putImageData", "quadraticCurveTo", "querySelector", "querySelectorAll", "quotes", "readOnly",
    "readyState", "rect", "referrer", "referrerPolicy", "rel", "relatedTarget", "releaseEvents",
    "reload", "remove", "removeAllRanges", "removeAttribute", "removeAttributeNode",
    "removeAttributeNS", "removeChild", "removedNodes", "removeEventListener", "removeItem",
    "removeProperty", "replaceChild", "replaceChildren", "replaceState", "replaceWith",
    "reportValidity", "requestAnimationFrame", "requestFullscreen", "required", "reset", "resize",
    "response", "responseText", "responseType", "responseURL", "responseXML", "restore",
    "returnValue", "right", "role", "rotate", "rowIndex", "rows", "rowSpan", "rules", "sandbox",
    "save", "scale", "screen", "screenLeft", "screenTop", "screenX", "screenY", "scripts",
    "scroll", "scrollBy", "scrollHeight", "scrollIntoView", "scrollLeft", "scrollTo", "scrollTop",
    "scrollWidth", "scrollX", "scrollY", "search", "sectionRowIndex", "select", "selected",
    "selectedIndex", "selectedOptions", "selectionEnd", "selectionStart", "send", "sessionStorage",
    "setAttribute", "setAttributeNode", "setAttributeNS", "setCustomValidity", "setData",
    "setDragImage", "setInterval", "setItem", "setProperty", "setRequestHeader",
    "setSelectionRange", "setTimeout", "shadowRoot", "shape", "sheet", "shiftKey", "span",
    "specified", "src", "srcdoc", "srcElement", "srclang", "srcset", "start", "state", "status",
    "statusText", "stopImmediatePropagation", "stopPropagation", "storageArea", "stroke",
    "strokeRect", "strokeStyle", "strokeText", "style", "styleSheets", "submit", "summary",
    "tabIndex", "tableLayout", "tagName", "target", "targetTouches", "tBodies", "text",
    "TEXT_NODE", "textAlign", "textBaseline", "textContent", "textDecoration", "textIndent",
    "textOverflow", "textShadow", "textTransform", "tFoot", "tHead", "timeout", "timeStamp",
    "title", "toDataURL", "toggle", "toggleAttribute", "top", "touches", "transform",
    "transformOrigin", "transition", "transitionDelay", "transitionDuration", "transitionProperty",
    "transitionTimingFunction", "translate", "type", "unescape", "UNSENT", "upload", "useMap",
    "userAgent", "userSelect", "validationMessage", "validity", "value", "valueAsDate",
    "valueAsNumber", "vendor", "verticalAlign", "videoHeight", "videoWidth", "visibility",
    "visibilityState", "volume", "vspace", "watchPosition", "which", "whiteSpace", "width",
    "willChange", "window", "withCredentials", "wordBreak", "wordSpacing", "wordWrap", "write",
    "writeln", "writingMode", "x", "y", "zIndex", "zoom",
];
